/// Tests for transaction lifecycle tracking and the staggered
/// post-confirmation refresh.

#[cfg(test)]
mod tx_monitor_tests {
    use zetasave_core::tx::{TxMonitor, TxStatus};

    #[test]
    fn test_lifecycle_submitted_confirming_confirmed() {
        let mut tx = TxMonitor::submitted("0xhash");
        assert_eq!(tx.status, TxStatus::Submitted);
        assert!(!tx.status.is_terminal());

        tx.confirming().unwrap();
        assert_eq!(tx.status, TxStatus::Confirming);

        tx.confirmed().unwrap();
        assert!(tx.status.is_terminal());
    }

    #[test]
    fn test_failure_carries_reason_and_is_terminal() {
        let mut tx = TxMonitor::submitted("0xhash");
        tx.confirming().unwrap();
        tx.failed("insufficient balance").unwrap();

        assert_eq!(
            tx.status,
            TxStatus::Failed("insufficient balance".to_string())
        );
        // No automatic retry: terminal status rejects every transition.
        assert!(tx.confirming().is_err());
        assert!(tx.confirmed().is_err());
    }
}

#[cfg(test)]
mod confirmation_refresh_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use zetasave_core::tx::{
        schedule_confirmation_refresh, REFRESH_DELAY_LONG, REFRESH_DELAY_SHORT,
    };

    #[tokio::test(start_paused = true)]
    async fn test_refresh_fires_at_two_staggered_delays() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();

        let handle = schedule_confirmation_refresh(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(REFRESH_DELAY_SHORT + Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(REFRESH_DELAY_LONG).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        handle.await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
