use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that sets up a temporary cvpress environment
struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    work_dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".cvpress");
        let work_dir = temp_dir.path().join("work");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            work_dir,
        }
    }

    fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn work_dir(&self) -> &PathBuf {
        &self.work_dir
    }

    fn output_dir(&self) -> PathBuf {
        let dir = self.work_dir.join("out");
        fs::create_dir_all(&dir).expect("Failed to create output dir");
        dir
    }

    fn write_minimal_resume(&self) -> PathBuf {
        cvpress_testing::fixtures::write_minimal_resume(self.work_dir())
            .expect("Failed to write resume fixture")
    }

    fn write_sample_resume(&self) -> PathBuf {
        cvpress_testing::fixtures::write_sample_resume(self.work_dir())
            .expect("Failed to write resume fixture")
    }

    /// Run cvpress with this fixture's data directory
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cvpress").expect("Failed to find cvpress binary");
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.env_remove("CVPRESS_PATH");
        cmd.env_remove("CVPRESS_BROWSER");
        cmd
    }
}

#[test]
fn no_subcommand_prints_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cvpress init")
                .and(predicate::str::contains("cvpress --help")),
        );
}

#[test]
fn guidance_switches_once_config_exists() {
    let fixture = TestFixture::new();

    fixture.command().arg("init").assert().success();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"));
}

#[test]
fn render_markdown_to_stdout() {
    let fixture = TestFixture::new();
    let input = fixture.write_minimal_resume();

    fixture
        .command()
        .arg("render")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Jim Bob")
                .and(predicate::str::contains("### Engineer"))
                .and(predicate::str::contains("[j@x.com](mailto:j@x.com)"))
                .and(predicate::str::contains("(tel:5551234)"))
                .and(predicate::str::contains("## PROFESSIONAL SUMMARY")),
        );
}

#[test]
fn render_plain_variant_omits_markup() {
    let fixture = TestFixture::new();
    let input = fixture.write_minimal_resume();

    fixture
        .command()
        .arg("render")
        .arg(&input)
        .arg("--variant")
        .arg("plain")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jim Bob")
                .and(predicate::str::contains("PROFESSIONAL SUMMARY"))
                .and(predicate::str::contains("#").not())
                .and(predicate::str::contains("](").not()),
        );
}

#[test]
fn render_writes_the_output_file() {
    let fixture = TestFixture::new();
    let input = fixture.write_minimal_resume();
    let target = fixture.work_dir().join("minimal.md");

    fixture
        .command()
        .arg("render")
        .arg(&input)
        .arg("--output")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let text = fs::read_to_string(&target).expect("Output file should exist");
    assert!(text.starts_with("# Jim Bob\n"));
}

#[test]
fn render_missing_input_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("render")
        .arg(fixture.work_dir().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn generate_missing_output_dir_fails() {
    let fixture = TestFixture::new();
    let input = fixture.write_minimal_resume();

    fixture
        .command()
        .arg("generate")
        .arg(&input)
        .arg(fixture.work_dir().join("never-created"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn init_writes_config_and_honors_refresh() {
    let fixture = TestFixture::new();
    let config_path = fixture.data_dir().join("config.toml");

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let text = fs::read_to_string(&config_path).expect("Config should exist");
    assert!(text.contains("[browser]"));
    assert!(text.contains("download = false"));
    assert!(text.contains("timeout_secs = 60"));

    // A second init without --refresh keeps the file as it is.
    fs::write(&config_path, "[browser]\ndownload = true\n").unwrap();
    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    let kept = fs::read_to_string(&config_path).unwrap();
    assert!(kept.contains("download = true"));

    fixture
        .command()
        .arg("init")
        .arg("--refresh")
        .assert()
        .success();
    let refreshed = fs::read_to_string(&config_path).unwrap();
    assert!(refreshed.contains("download = false"));
}

#[test]
fn doctor_reports_the_environment() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("doctor")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Platform:")
                .and(predicate::str::contains("Data dir:"))
                .and(predicate::str::contains("Config:"))
                .and(predicate::str::contains("Browser:"))
                .and(predicate::str::contains("Cache:")),
        );
}

#[cfg(unix)]
mod with_fake_browser {
    use super::*;
    use cvpress_testing::browser;

    #[test]
    fn generate_produces_three_artifacts() {
        let fixture = TestFixture::new();
        let input = fixture.write_sample_resume();
        let out = fixture.output_dir();
        let executable = browser::write_fake_browser(fixture.work_dir()).unwrap();

        fixture
            .command()
            .arg("generate")
            .arg(&input)
            .arg(&out)
            .arg("--browser")
            .arg(&executable)
            .assert()
            .success()
            .stdout(predicate::str::contains("Generated"));

        assert!(out.join("sample.md").is_file());
        assert!(out.join("sample.html").is_file());
        assert!(out.join("sample.pdf").is_file());

        let page = fs::read_to_string(out.join("sample.html")).unwrap();
        assert!(page.contains("<title>Ada Lovelace</title>"));
        assert!(page.contains("<style>"));
    }

    #[test]
    fn generate_external_css_flag_links_the_stylesheet() {
        let fixture = TestFixture::new();
        let input = fixture.write_sample_resume();
        let out = fixture.output_dir();
        let executable = browser::write_fake_browser(fixture.work_dir()).unwrap();

        fixture
            .command()
            .arg("generate")
            .arg(&input)
            .arg(&out)
            .arg("--external-css")
            .arg("--browser")
            .arg(&executable)
            .assert()
            .success();

        assert!(out.join("resume.css").is_file());
        let page = fs::read_to_string(out.join("sample.html")).unwrap();
        assert!(page.contains("<link rel=\"stylesheet\" href=\"resume.css\" />"));
        assert!(!page.contains("<style>"));
    }

    #[test]
    fn generate_reads_output_settings_from_config() {
        let fixture = TestFixture::new();
        let input = fixture.write_sample_resume();
        let out = fixture.output_dir();
        let executable = browser::write_fake_browser(fixture.work_dir()).unwrap();

        let config_path = fixture.data_dir().join("config.toml");
        fs::write(&config_path, "[output]\nexternal_css = true\n").unwrap();

        fixture
            .command()
            .arg("generate")
            .arg(&input)
            .arg(&out)
            .arg("--browser")
            .arg(&executable)
            .assert()
            .success();

        assert!(out.join("resume.css").is_file());
    }

    #[test]
    fn generate_missing_browser_override_fails() {
        let fixture = TestFixture::new();
        let input = fixture.write_sample_resume();
        let out = fixture.output_dir();

        fixture
            .command()
            .arg("generate")
            .arg(&input)
            .arg(&out)
            .arg("--browser")
            .arg("/nonexistent/browser")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Browser unavailable"));
    }

    #[test]
    fn doctor_reports_the_environment_browser() {
        let fixture = TestFixture::new();
        let stub = browser::write_stub_executable(fixture.work_dir(), "chromium").unwrap();

        fixture
            .command()
            .env("CVPRESS_BROWSER", &stub)
            .arg("doctor")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("environment")
                    .and(predicate::str::contains(stub.display().to_string())),
            );
    }
}
