use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn network_error_displays_description() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn status_error_displays_code() {
    let err = ApiError::Status(500);
    assert_eq!(err.to_string(), "server returned status 500");
}

#[test]
fn error_kinds_are_distinct() {
    assert_ne!(
        ApiError::Network("x".to_owned()),
        ApiError::Status(500)
    );
}

// =============================================================
// Non-browser stubs
// =============================================================

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn endpoints_error_outside_the_browser() {
    let result = poll_ready(start_game());
    assert!(matches!(result, Err(ApiError::Network(_))));

    let result = poll_ready(reset());
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// The stub futures are immediately ready; poll once with a no-op waker
// instead of pulling in an executor.
#[cfg(not(target_arch = "wasm32"))]
fn poll_ready<F: Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => unreachable!("stub future is always ready"),
    }
}
