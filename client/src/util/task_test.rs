use super::*;

#[test]
fn starts_live() {
    assert!(TaskHandle::new().is_live());
    assert!(TaskHandle::default().is_live());
}

#[test]
fn cancel_is_idempotent() {
    let handle = TaskHandle::new();
    handle.cancel();
    handle.cancel();
    assert!(!handle.is_live());
}

#[test]
fn clones_share_liveness() {
    let owner = TaskHandle::new();
    let worker = owner.clone();
    owner.cancel();
    assert!(!worker.is_live());
}

#[test]
fn independent_handles_do_not_interfere() {
    let a = TaskHandle::new();
    let b = TaskHandle::new();
    a.cancel();
    assert!(b.is_live());
}

#[test]
fn cancel_from_another_thread() {
    let handle = TaskHandle::new();
    let remote = handle.clone();
    std::thread::spawn(move || remote.cancel()).join().expect("join");
    assert!(!handle.is_live());
}
