//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use identicon::IdenticonError;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = IdenticonError::FileSystem {
            path: "/tmp/out".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/out"));
    }

    // Tests validation errors carry the rejected value
    // Verified by omitting value from message
    #[test]
    fn test_validation_messages() {
        assert!(
            IdenticonError::InvalidGridSize { value: 4 }
                .to_string()
                .contains("size 4:")
        );
        assert!(
            IdenticonError::InvalidPadding { value: 0.75 }
                .to_string()
                .contains("0.75")
        );
        assert!(
            IdenticonError::InvalidMinPoints { value: -1 }
                .to_string()
                .contains("-1")
        );
        assert!(IdenticonError::InvalidInput.to_string().contains("empty"));
    }

    // Tests validation errors have no source
    // Verified by attaching a placeholder source
    #[test]
    fn test_validation_errors_have_no_source() {
        assert!(IdenticonError::InvalidColor.source().is_none());
        assert!(IdenticonError::NilSink.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = IdenticonError::ImageExport {
            path: "/restricted/output.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests encoder errors convert for the ? operator without a file path
    // Verified by mapping encoder errors to FileSystem
    #[test]
    fn test_from_image_error() {
        let image_error = image::ImageError::IoError(std::io::Error::other("broken pipe"));
        let error: IdenticonError = image_error.into();

        assert!(matches!(
            error,
            IdenticonError::ImageExport { ref path, .. } if path.as_os_str() == "<stream>"
        ));
        assert!(error.to_string().contains("broken pipe"));
    }
}
