// ═══════════════════════════════════════════════════════════════════
// Toast Tests — id monotonicity, removal, scoped expiry timers
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use roboadvisor_client_core::toast::{
    Toast, ToastKind, ToastStore, ToastTimers, DEFAULT_TOAST_DURATION,
};

// ── Id monotonicity ─────────────────────────────────────────────────

mod ids {
    use super::*;

    #[test]
    fn sequential_ids_strictly_increase() {
        let store = ToastStore::new();
        let mut last = store.success("first");
        for i in 0..100 {
            let id = store.info(format!("toast {i}"));
            assert!(id > last, "id {id} must be greater than {last}");
            last = id;
        }
    }

    #[test]
    fn ids_survive_removal_without_reuse() {
        let store = ToastStore::new();
        let first = store.success("one");
        store.remove(first);
        let second = store.success("two");
        assert!(second > first);
    }

    #[test]
    fn concurrent_issuance_yields_distinct_ids() {
        let store = Arc::new(ToastStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                (0..50).map(|i| store.warning(format!("t{i}"))).collect::<Vec<u64>>()
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.join().unwrap());
        }

        let distinct: HashSet<u64> = all.iter().copied().collect();
        assert_eq!(distinct.len(), all.len(), "every id must be unique");
    }

    #[test]
    fn ids_are_process_wide_across_stores() {
        // Two independent stores share the counter: ids never collide.
        let a = ToastStore::new();
        let b = ToastStore::new();
        let id_a = a.success("a");
        let id_b = b.success("b");
        assert_ne!(id_a, id_b);
    }
}

// ── Queue behavior ──────────────────────────────────────────────────

mod queue {
    use super::*;

    #[test]
    fn show_appends_in_order() {
        let store = ToastStore::new();
        store.show("first", ToastKind::Info, Duration::from_millis(500));
        store.show("second", ToastKind::Error, Duration::from_millis(500));

        let toasts: Vec<Toast> = store.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].message, "first");
        assert_eq!(toasts[1].message, "second");
        assert!(toasts[0].id < toasts[1].id);
    }

    #[test]
    fn remove_is_idempotent() {
        let store = ToastStore::new();
        let id = store.success("bye");
        store.remove(id);
        store.remove(id); // absent id → no-op
        store.remove(9_999_999); // never existed → no-op
        assert!(store.is_empty());
    }

    #[test]
    fn convenience_wrappers_set_their_kind() {
        let store = ToastStore::new();
        store.success("s");
        store.error("e");
        store.info("i");
        store.warning("w");

        let kinds: Vec<ToastKind> = store.toasts().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ToastKind::Success,
                ToastKind::Error,
                ToastKind::Info,
                ToastKind::Warning
            ]
        );
    }

    #[test]
    fn default_duration_is_three_seconds() {
        let store = ToastStore::new();
        store.success("s");
        assert_eq!(store.toasts()[0].duration, DEFAULT_TOAST_DURATION);
    }
}

// ── Scoped expiry timers ────────────────────────────────────────────

mod timers {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn expiry_removes_the_toast() {
        let store = Arc::new(ToastStore::new());
        let timers = ToastTimers::new();

        let id = store.show("ephemeral", ToastKind::Info, Duration::from_millis(20));
        timers.schedule(&store, id, Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(store.is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn early_dismissal_cancels_the_timer() {
        let store = Arc::new(ToastStore::new());
        let timers = ToastTimers::new();

        let id = store.show("dismissed", ToastKind::Info, Duration::from_millis(50));
        timers.schedule(&store, id, Duration::from_millis(50));

        store.remove(id);
        timers.cancel(id);
        assert_eq!(timers.pending(), 0);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(store.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dropping_the_owner_aborts_outstanding_timers() {
        let store = Arc::new(ToastStore::new());
        let id = {
            let timers = ToastTimers::new();
            let id = store.show("survivor", ToastKind::Info, Duration::from_millis(30));
            timers.schedule(&store, id, Duration::from_millis(30));
            id
            // timers dropped here; the expiry task must die with it
        };

        tokio::time::sleep(Duration::from_millis(120)).await;
        let toasts = store.toasts();
        assert_eq!(toasts.len(), 1, "aborted timer must not remove the toast");
        assert_eq!(toasts[0].id, id);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn cancel_of_unknown_id_is_a_noop() {
        let timers = ToastTimers::new();
        timers.cancel(42);
        assert_eq!(timers.pending(), 0);
    }
}
