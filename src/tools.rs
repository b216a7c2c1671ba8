// External tool resolution for the two binaries catsense shells out to.
//
// Resolution order:
// 1) Environment variable override (CATSENSE_FFMPEG_PATH, CATSENSE_FFPROBE_PATH)
// 2) Sidecar next to the executable (or its bin/ subdirectory)
// 3) PATH fallback

use std::env;
use std::path::PathBuf;

/// The external binaries the extraction pipeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Ffmpeg,
    Ffprobe,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Ffmpeg => "ffmpeg",
            Tool::Ffprobe => "ffprobe",
        }
    }

    fn env_key(self) -> &'static str {
        match self {
            Tool::Ffmpeg => "CATSENSE_FFMPEG_PATH",
            Tool::Ffprobe => "CATSENSE_FFPROBE_PATH",
        }
    }

    /// Resolve the binary, preferring an env override, then a sidecar next
    /// to the executable, then PATH.
    pub fn path(self) -> PathBuf {
        if let Ok(v) = env::var(self.env_key()) {
            let p = PathBuf::from(&v);
            if p.exists() {
                return p;
            }
        }

        // Add .exe on Windows
        let mut filename = self.name().to_string();
        if cfg!(windows) {
            filename.push_str(".exe");
        }

        if let Some(dir) = exe_dir() {
            let candidate = dir.join(&filename);
            if candidate.exists() {
                return candidate;
            }

            let bin_candidate = dir.join("bin").join(&filename);
            if bin_candidate.exists() {
                return bin_candidate;
            }
        }

        // Fall back to PATH
        PathBuf::from(self.name())
    }

    /// True when the resolved binary exists or answers `-version`.
    pub fn is_available(self) -> bool {
        let path = self.path();
        if path.exists() {
            return true;
        }

        std::process::Command::new(&path)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

/// Get the directory containing the current executable
fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}
