use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A `gh` stand-in that logs its arguments and answers label and
/// milestone calls.
///
/// Existing labels are `task` and `bug`; there are no existing milestones.
pub struct FakeGh {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeGh {
    pub fn new() -> Self {
        Self::build(None, false)
    }

    /// Creating the milestone with this title fails with exit status 1.
    pub fn failing_milestone(title: &str) -> Self {
        Self::build(Some(title), false)
    }

    /// Every listing call fails as if `gh` were not authenticated.
    pub fn unauthenticated() -> Self {
        Self::build(None, true)
    }

    fn build(failing_milestone: Option<&str>, fail_listing: bool) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake gh");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("gh.log");

        let gh_script_path = bin_dir.join("gh");
        let failing_title = failing_milestone.unwrap_or("");
        let fail_listing = if fail_listing { "1" } else { "0" };

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"

ARGS="$*"
FAILING_TITLE="{failing_title}"

case "$1" in
    label)
        if [ "$2" = "list" ]; then
            if [ "{fail_listing}" = "1" ]; then
                echo "HTTP 401: Bad credentials" >&2
                exit 1
            fi
            echo '[{{"name":"task"}},{{"name":"bug"}}]'
        fi
        ;;
    api)
        case "$ARGS" in
            *"-X POST"*)
                if [ -n "$FAILING_TITLE" ]; then
                    case "$ARGS" in
                        *"title=$FAILING_TITLE -f"*)
                            echo "HTTP 422: Validation Failed" >&2
                            exit 1
                            ;;
                    esac
                fi
                echo '{{}}'
                ;;
            *)
                if [ "{fail_listing}" = "1" ]; then
                    echo "HTTP 401: Bad credentials" >&2
                    exit 1
                fi
                ;;
        esac
        ;;
esac

exit 0
"#,
            log = log_file.to_string_lossy(),
            failing_title = failing_title,
            fail_listing = fail_listing,
        );

        fs::write(&gh_script_path, script_content).expect("Failed to write gh script");

        let mut perms =
            fs::metadata(&gh_script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&gh_script_path, perms).expect("Failed to set permissions");

        Self { root, bin_dir, log_file }
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Logged invocations whose arguments start with `prefix`.
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.get_log().lines().filter(|l| l.starts_with(prefix)).map(String::from).collect()
    }
}
