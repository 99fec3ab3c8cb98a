use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Project {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Project {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        Self { _temp_dir: temp_dir, root }
    }

    fn file(self, rel: &str, content: &str) -> Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_abandoned-strings"))
            .current_dir(&self.root)
            .env("RUST_LOG", "off")
            .args(args)
            .output()
            .unwrap()
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn sample() -> Project {
    Project::new()
        .file("App/View.swift", "label.text = NSLocalizedString(\"Hello\", comment: \"\")\n")
        .file("App/bundle.jsbundle", "t('Greeting')")
        .file("App/Main.storyboard", "<string key=\"title\" value=\"@FromBoard\"/>")
        .file(
            "App/en.lproj/Localizable.strings",
            "/* greetings */\n\"Hello\" = \"Hi\";\n\"Bye\" = \"Later\";\n\"Greeting\" = \"Yo\";\n\"FromBoard\" = \"B\";\n",
        )
        .file("App/en.lproj/Clean.strings", "// nothing here\n")
}

#[test]
fn no_roots_prints_usage_and_succeeds() {
    let out = Project::new().run(&[]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Please provide the root directory"));
    assert!(text.contains("Usage:"));
}

#[test]
fn reports_abandoned_identifiers() {
    let project = sample();
    let out = project.run(&["App"]);
    assert!(out.status.success());
    let expected = format!(
        "Searching for abandoned resource strings…\n\
         Abandoned resource strings were detected:\n\
         {}\n  Bye\n  FromBoard\n\n",
        Path::new("App").join("en.lproj/Localizable.strings").display()
    );
    assert_eq!(stdout(&out), expected);
    // 只报告不改写
    assert!(project.read("App/en.lproj/Localizable.strings").contains("\"Bye\""));
}

#[test]
fn storyboard_literal_includes_storyboards() {
    let out = sample().run(&["App", "storyboard"]);
    let text = stdout(&out);
    assert!(text.contains("  Bye\n"));
    assert!(!text.contains("FromBoard"));
}

#[test]
fn write_literal_rewrites_in_place() {
    let project = sample();
    let out = project.run(&["App", "write", "--storyboard"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Now modifying"));
    assert_eq!(
        project.read("App/en.lproj/Localizable.strings"),
        "/* greetings */\n\"Hello\" = \"Hi\";\n\"Greeting\" = \"Yo\";\n\"FromBoard\" = \"B\";\n"
    );
    assert_eq!(project.read("App/en.lproj/Clean.strings"), "// nothing here\n");

    let again = project.run(&["App", "--storyboard"]);
    assert!(stdout(&again).contains("No abandoned resource strings were detected."));
}

#[test]
fn write_failure_is_reported_and_other_files_are_rewritten() {
    let project = sample().file("App/de.lproj/Localizable.strings", "\"Bye\" = \"Tschüss\";\n\"Hello\" = \"Hallo\";\n");
    // 临时文件位置被目录占用，de 的写回必然失败
    fs::create_dir(abandoned_core::temp_path_for(&project.path("App/de.lproj/Localizable.strings"))).unwrap();

    let out = project.run(&["App", "write"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR writing file"));
    assert!(stderr.contains("de.lproj"));

    assert_eq!(
        project.read("App/de.lproj/Localizable.strings"),
        "\"Bye\" = \"Tschüss\";\n\"Hello\" = \"Hallo\";\n"
    );
    assert_eq!(
        project.read("App/en.lproj/Localizable.strings"),
        "/* greetings */\n\"Hello\" = \"Hi\";\n\"Greeting\" = \"Yo\";\n"
    );
}

#[test]
fn json_format_keeps_stdout_machine_readable() {
    let out = sample().run(&["--format", "json", "--threads", "2", "App"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.trim_start().starts_with('['));
    assert!(text.contains("\"Bye\""));
    assert!(text.contains("\"FromBoard\""));
    assert!(!text.contains("Searching"));
}

#[test]
fn config_file_adds_source_extensions() {
    let project = sample()
        .file("App/Legacy.mm", "@\"Bye\"")
        .file("abandoned.toml", "extra_source_extensions = [\"mm\"]\n");
    let text = stdout(&project.run(&["--config", "abandoned.toml", "App"]));
    assert!(!text.contains("  Bye\n"));
    assert!(text.contains("  FromBoard\n"));
}

#[test]
fn missing_root_fails() {
    let out = Project::new().run(&["does-not-exist"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("does-not-exist"));
}

#[test]
fn malformed_resource_fails() {
    let project = Project::new().file("App/Bad.strings", "\"ok\" = \"1\";\n\"broken = 2;\n");
    let out = project.run(&["App"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Bad.strings"));
}
