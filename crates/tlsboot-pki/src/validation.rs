//! Validation utilities for issued certificates.

use chrono::Utc;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use x509_parser::prelude::*;

use crate::error::{Error, Result};
use crate::types::{Certificate, PrivateKey};

/// Checks if a certificate is expired.
#[must_use]
pub fn is_expired(cert: &Certificate) -> bool {
    cert.not_after() < Utc::now()
}

/// Checks if a certificate is not yet valid.
#[must_use]
pub fn is_not_yet_valid(cert: &Certificate) -> bool {
    cert.not_before() > Utc::now()
}

/// Checks if a certificate is currently within its validity window.
#[must_use]
pub fn is_valid_now(cert: &Certificate) -> bool {
    !is_expired(cert) && !is_not_yet_valid(cert)
}

/// Checks if a certificate is self-signed (issuer == subject).
#[must_use]
pub fn is_self_signed(cert: &Certificate) -> bool {
    cert.issuer() == cert.subject()
}

/// Verifies that a private key corresponds to the certificate's public key.
///
/// Recovers the public point from the SEC1-encoded key and compares it with
/// the uncompressed point embedded in the certificate's
/// `SubjectPublicKeyInfo`.
///
/// # Errors
///
/// Returns an error if either side cannot be parsed, or
/// [`Error::Validation`] when the points differ.
pub fn key_matches_certificate(cert: &Certificate, key: &PrivateKey) -> Result<()> {
    let secret = p256::SecretKey::from_sec1_der(key.der())
        .map_err(|e| Error::Parse(format!("failed to parse SEC1 private key: {e}")))?;
    let derived_point = secret.public_key().to_encoded_point(false);

    let (_, parsed) = X509Certificate::from_der(cert.der())
        .map_err(|e| Error::Parse(format!("failed to parse certificate: {e}")))?;
    let cert_point = &parsed.public_key().subject_public_key.data;

    if cert_point.as_ref() != derived_point.as_bytes() {
        return Err(Error::Validation(
            "certificate public key does not match private key".into(),
        ));
    }

    Ok(())
}
