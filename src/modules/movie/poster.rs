use crate::common::error::{AppError, AppResult};
use crate::config::settings::{parse_extensions, AppConfig, DEFAULT_POSTER_EXTENSIONS, DEFAULT_POSTER_MAX_SIZE};

/// File type and size rules for poster uploads. Built once at startup.
#[derive(Debug, Clone)]
pub struct PosterPolicy {
    allowed_extensions: Vec<String>,
    max_size_bytes: usize,
}

impl Default for PosterPolicy {
    fn default() -> Self {
        Self::new(parse_extensions(DEFAULT_POSTER_EXTENSIONS), DEFAULT_POSTER_MAX_SIZE)
    }
}

impl PosterPolicy {
    /// `allowed_extensions` must be lowercase and start with a dot.
    pub fn new(allowed_extensions: Vec<String>, max_size_bytes: usize) -> Self {
        Self {
            allowed_extensions,
            max_size_bytes,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.poster_allowed_extensions.clone(),
            config.poster_max_size_bytes,
        )
    }

    /// Checks the extension first, then the size. The first failure wins.
    pub fn validate(&self, file_name: &str, size_bytes: usize) -> AppResult<()> {
        let allowed = extension_of(file_name)
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| *a == ext));
        if !allowed {
            return Err(AppError::UnsupportedImageType {
                allowed: self.allowed_extensions.join(", "),
            });
        }

        if size_bytes > self.max_size_bytes {
            return Err(AppError::ImageTooLarge {
                max_bytes: self.max_size_bytes,
            });
        }

        Ok(())
    }
}

/// Lowercased extension of the last path segment, dot included.
///
/// `"a/b.JPG"` gives `".jpg"`, `".png"` gives `".png"`, while `"poster"` and
/// `"poster."` have none.
fn extension_of(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let dot = base.rfind('.')?;
    if dot + 1 == base.len() {
        return None;
    }
    Some(base[dot..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: usize = 1_048_576;

    #[test]
    fn accepts_allowed_extensions_in_any_case() {
        let policy = PosterPolicy::default();
        for name in ["dune.jpg", "DUNE.JPG", "dune.Png", "covers/dune.final.png", r"C:\tmp\x.jpg"] {
            assert!(policy.validate(name, 10).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_other_or_missing_extensions() {
        let policy = PosterPolicy::default();
        for name in ["dune.jpeg", "dune.gif", "dune", "dune.", "", "png", "dune.png.exe", "dir.png/poster"] {
            assert!(
                matches!(policy.validate(name, 10), Err(AppError::UnsupportedImageType { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        let policy = PosterPolicy::default();
        assert!(policy.validate("a.jpg", MIB).is_ok());
        assert!(policy.validate("a.jpg", 0).is_ok());
        assert!(matches!(
            policy.validate("a.jpg", MIB + 1),
            Err(AppError::ImageTooLarge { max_bytes: MIB })
        ));
    }

    #[test]
    fn extension_is_checked_before_size() {
        let policy = PosterPolicy::default();
        assert!(matches!(
            policy.validate("a.gif", MIB * 5),
            Err(AppError::UnsupportedImageType { .. })
        ));
    }

    #[test]
    fn custom_policy_is_honoured() {
        let policy = PosterPolicy::new(vec![".webp".into()], 100);
        assert!(policy.validate("a.WEBP", 100).is_ok());
        assert!(policy.validate("a.jpg", 1).is_err());
        assert!(policy.validate("a.webp", 101).is_err());
    }

    #[test]
    fn dotfile_name_counts_as_extension() {
        assert_eq!(extension_of(".png").as_deref(), Some(".png"));
        assert_eq!(extension_of("poster."), None);
    }
}
