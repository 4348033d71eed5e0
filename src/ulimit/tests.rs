#[cfg(test)]
mod tests {
    use crate::status::Status;
    use crate::ulimit::{ProcSample, UlimitCheck};

    fn sample(pid: u32, open_fds: u64, soft_limit: Option<u64>) -> ProcSample {
        ProcSample {
            pid,
            name: format!("proc{}", pid),
            open_fds,
            soft_limit,
        }
    }

    #[test]
    fn test_no_samples_is_ok() {
        let verdict = UlimitCheck::default().evaluate(Vec::new());
        assert_eq!(verdict.status, Status::Ok);
        assert_eq!(verdict.render(), "OK");
    }

    #[test]
    fn test_processes_below_threshold_are_ok() {
        let verdict = UlimitCheck::default().evaluate(vec![
            sample(1, 10, Some(1024)),
            sample(2, 0, Some(1)),
        ]);
        assert_eq!(verdict.status, Status::Ok);
    }

    #[test]
    fn test_unlimited_and_unset_limits_are_skipped() {
        let verdict = UlimitCheck::default().evaluate(vec![
            sample(1, 1_000_000, None),
            sample(2, 5, Some(0)),
        ]);
        assert_eq!(verdict.status, Status::Ok);
    }

    #[test]
    fn test_limit_reached_is_critical() {
        let verdict = UlimitCheck::default().evaluate(vec![sample(7, 1024, Some(1024))]);
        assert_eq!(verdict.status, Status::Critical);
        assert_eq!(
            verdict.render(),
            "CRITICAL: PID 7 [proc7] reached its soft limit (open: 1024, limit 1024)"
        );
    }

    #[test]
    fn test_warning_threshold_boundary() {
        let check = UlimitCheck::new(60);

        // 59 of 100 is below 60 percent
        let verdict = check.evaluate(vec![sample(1, 59, Some(100))]);
        assert_eq!(verdict.status, Status::Ok);

        // 60 of 100 hits the threshold
        let verdict = check.evaluate(vec![sample(1, 60, Some(100))]);
        assert_eq!(verdict.status, Status::Warning);
        assert_eq!(
            verdict.render(),
            "WARNING: PID 1 [proc1] nearly reached its soft limit at 60 open fds"
        );
    }

    #[test]
    fn test_critical_wins_over_later_warnings() {
        let verdict = UlimitCheck::new(60).evaluate(vec![
            sample(1, 100, Some(100)),
            sample(2, 60, Some(100)),
        ]);
        assert_eq!(verdict.status, Status::Critical);
        assert!(verdict.message.contains("PID 1"));
        assert!(verdict.message.contains("PID 2"));
        assert_eq!(verdict.message.lines().count(), 2);
    }
}
