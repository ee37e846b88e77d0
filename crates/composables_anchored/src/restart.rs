//! Restart-on-change driver
//!
//! The drag state bumps a revision counter whenever its anchors or drag
//! target change. [`restartable`] watches that counter while a campaign block
//! runs and, when the block's inputs actually differ, drops the running
//! invocation and starts a fresh one with the latest inputs.

use std::future::Future;

use tokio::sync::watch;

/// Run `block(inputs())` to completion, restarting it whenever a revision
/// change yields different inputs
///
/// The previous invocation is always dropped before the next one is created,
/// so two invocations never overlap.
pub(crate) async fn restartable<I, N, F, Fut>(
    mut changes: watch::Receiver<u64>,
    inputs: N,
    mut block: F,
) where
    I: PartialEq + Clone,
    N: Fn() -> I,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = ()>,
{
    changes.borrow_and_update();
    let mut latest = inputs();
    let mut restarts = 0u32;

    loop {
        let run = block(latest.clone());
        tokio::pin!(run);

        let next = loop {
            tokio::select! {
                biased;
                () = &mut run => return,
                changed = changes.changed() => {
                    if changed.is_err() {
                        // Nothing can change the inputs anymore
                        run.await;
                        return;
                    }
                    let next = inputs();
                    if next != latest {
                        break next;
                    }
                }
            }
        };

        restarts += 1;
        tracing::trace!(restarts, "drag inputs changed, restarting block");
        latest = next;
    }
}
