use crate::schema::communication::error::ResponseWriteError;

use http::header::{ HeaderName, HeaderValue, };
use http::status::StatusCode;
#[cfg(test)]
use mockall::automock;

use std::result::Result;


/// Output channel of the host server that a response is emitted onto.
#[cfg_attr(test, automock)]
pub trait HttpResponseWriter {

    /// Must be called before any header is emitted.
    fn emit_status_line(
        &mut self,
        line: &str,
    ) -> Result<(), ResponseWriteError>;

    fn set_status_code(
        &mut self,
        code: &StatusCode,
    ) -> ();

    /// Adds a header line, keeping earlier lines with the same name.
    fn append_http_header(
        &mut self,
        key: &HeaderName,
        value: &HeaderValue,
    ) -> Result<(), ResponseWriteError>;

    /// Adds a header line, replacing earlier lines with the same name.
    fn set_http_header(
        &mut self,
        key: &HeaderName,
        value: &HeaderValue,
    ) -> Result<(), ResponseWriteError>;

    fn write_content(
        &mut self,
        payload: &[u8],
    ) -> Result<usize, ResponseWriteError> {
        let mut payload_slice = payload;
        while payload_slice.len() > 0 {
            let written = self.write(payload_slice)?;
            payload_slice = payload_slice.split_at(written.min(payload_slice.len())).1;
        }
        Ok(payload.len())
    }

    /// Writes a prefix of `buffer`, returning how many bytes were taken.
    fn write(
        &mut self,
        buffer: &[u8],
    ) -> Result<usize, ResponseWriteError>;

    fn flush_response(&mut self) -> Result<(), ResponseWriteError>;
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_utils::ThrottledWriter;
    use std::boxed::Box;
    use std::error::Error;

    #[test]
    fn test_write_content_small_lengths() -> Result<(), Box<dyn Error>> {
        let mut writer = ThrottledWriter::new(1, vec![2, 2, 2, 2]);
        let expected_payload = String::from("1234567");
        let written = writer.write_content(expected_payload.as_bytes())?;
        assert_eq!(expected_payload.len(), written, "Unexpected length reported");
        assert_eq!(expected_payload.as_bytes(), writer.written_payload.as_slice(), "Unexpected payload written");
        assert_eq!(vec![2, 2, 2, 1], writer.written_lengths, "Unexpected written lengths");
        Ok(())
    }

    #[test]
    fn test_write_content_large_lengths() -> Result<(), Box<dyn Error>> {
        let mut writer = ThrottledWriter::new(1, vec![128]);
        let expected_payload = String::from("1234567");
        writer.write_content(expected_payload.as_bytes())?;
        assert_eq!(expected_payload.as_bytes(), writer.written_payload.as_slice(), "Unexpected payload written");
        assert_eq!(vec![expected_payload.len()], writer.written_lengths, "Unexpected written lengths");
        Ok(())
    }

    #[test]
    fn test_write_content_paused_writes() -> Result<(), Box<dyn Error>> {
        let mut writer = ThrottledWriter::new(1, vec![2, 0, 4, 0, 2]);
        let expected_payload = String::from("1234567");
        writer.write_content(expected_payload.as_bytes())?;
        assert_eq!(expected_payload.as_bytes(), writer.written_payload.as_slice(), "Unexpected payload written");
        assert_eq!(vec![2, 0, 4, 0, 1], writer.written_lengths, "Unexpected written lengths");
        Ok(())
    }

    #[test]
    fn test_write_content_empty_payload() -> Result<(), Box<dyn Error>> {
        let mut writer = ThrottledWriter::new(1, Vec::new());
        assert_eq!(0, writer.write_content(&[])?, "Unexpected length reported");
        assert!(writer.written_lengths.is_empty(), "Empty payload caused a write");
        Ok(())
    }

    #[test]
    fn test_write_content_propagates_rejection() -> Result<(), Box<dyn Error>> {
        let mut writer = ThrottledWriter::new(1, vec![2]);
        writer.rejection_code = Some(-3);
        match writer.write_content(b"abc") {
            Err(ResponseWriteError::Rejected { error_code }) => {
                assert_eq!(-3, error_code, "Error code was not propagated");
                assert_eq!(b"ab".to_vec(), writer.written_payload, "Unexpected payload written before rejection");
            },
            other => panic!("Rejected write was not propagated: {:?}", other),
        }
        Ok(())
    }
}
