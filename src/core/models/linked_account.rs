use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// A linked account as persisted: the username and the key blob exactly
/// as the host returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedAccount {
    pub username: String,
    pub keys: String,
}

impl LinkedAccount {
    /// Individual key lines of the blob, for display.
    ///
    /// Blank lines and `#` comments are skipped. Nothing is validated.
    pub fn key_lines(&self) -> Vec<PublicKeyLine> {
        self.keys.lines().filter_map(PublicKeyLine::parse).collect()
    }
}

/// One `authorized_keys`-style line: `<algorithm> <base64 blob> [comment]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicKeyLine {
    pub algorithm: String,
    pub comment: Option<String>,
    /// `SHA256:...` fingerprint as printed by `ssh-keygen -l`, when the
    /// blob decodes.
    pub fingerprint: Option<String>,
}

impl PublicKeyLine {
    fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let mut fields = trimmed.split_whitespace();
        let algorithm = fields.next()?.to_string();
        let blob = fields.next();
        let comment = fields.collect::<Vec<_>>().join(" ");

        Some(Self {
            algorithm,
            comment: (!comment.is_empty()).then_some(comment),
            fingerprint: blob.and_then(fingerprint),
        })
    }
}

fn fingerprint(blob: &str) -> Option<String> {
    let raw = STANDARD.decode(blob).ok()?;
    let digest = Sha256::digest(&raw);
    Some(format!("SHA256:{}", STANDARD_NO_PAD.encode(digest)))
}

impl std::fmt::Display for PublicKeyLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm)?;
        if let Some(fp) = &self.fingerprint {
            write!(f, " {fp}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " ({comment})")?;
        }
        Ok(())
    }
}
