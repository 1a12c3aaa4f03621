//! Tests for PNG encoding to writers and files

#[cfg(test)]
mod tests {
    use identicon::io::image::{save_png, write_png};
    use identicon::{Identicon, IdenticonError};
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> RgbaImage {
        Identicon::default().generate("identicon").unwrap()
    }

    // Tests encoding into an in-memory sink round-trips pixels
    // Verified by encoding as RGB instead of RGBA
    #[test]
    fn test_write_png_to_buffer() {
        let img = sample();
        let mut buffer = Vec::new();
        write_png(&img, Some(&mut buffer)).unwrap();

        assert!(buffer.starts_with(&PNG_SIGNATURE));
        let decoded = image::load(Cursor::new(&buffer), ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded, img);
    }

    // Tests a missing sink is rejected
    // Verified by treating a missing sink as a no-op
    #[test]
    fn test_write_png_without_sink() {
        let result = write_png::<Vec<u8>>(&sample(), None);
        assert!(matches!(result, Err(IdenticonError::NilSink)));
    }

    // Tests saving creates missing parent directories
    // Verified by disabling directory creation
    #[test]
    fn test_save_png_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/avatars/user.png");

        save_png(&sample(), &path).unwrap();

        assert!(path.exists(), "PNG file should be created");
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&PNG_SIGNATURE));
    }

    // Tests a parent that is a file surfaces a file system error
    // Verified by ignoring directory creation failures
    #[test]
    fn test_save_png_parent_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = save_png(&sample(), &blocker.join("user.png"));
        assert!(matches!(result, Err(IdenticonError::FileSystem { .. })));
    }
}
