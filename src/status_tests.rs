#[cfg(test)]
mod tests {
    use crate::status::{Status, Verdict};

    #[test]
    fn test_status_exit_codes() {
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_status_labels_match_words() {
        assert_eq!(Status::Ok.label(), "OK");
        assert_eq!(Status::Warning.label(), "WARNING");
        assert_eq!(Status::Critical.label(), "CRITICAL");
        assert_eq!(Status::Unknown.label(), "UNKNOWN");
        assert_eq!(format!("{}", Status::Critical), "CRITICAL");
    }

    #[test]
    fn test_verdict_render_with_body() {
        let verdict = Verdict::new(Status::Warning, "failed: foo.service ");
        assert_eq!(verdict.render(), "WARNING: failed: foo.service ");
    }

    #[test]
    fn test_verdict_render_ok_has_no_body() {
        assert_eq!(Verdict::ok().render(), "OK");
    }
}
