//! Single-writer persistence queue.
//!
//! Mutations hand the writer a snapshot of the full habit sequence and
//! carry on; a background thread applies writes strictly in send order, so
//! the durable slot always converges to the latest snapshot rather than
//! whichever write happened to finish last. When snapshots queue up faster
//! than the disk keeps pace, only the newest pending one is written.
//! Failures are logged and never reach the caller.

use std::sync::mpsc::{self, Sender, TryRecvError};
use std::thread::JoinHandle;

use crate::habit::Habit;

use super::slot::HabitSlot;

/// Seam between the store and its persistence backend.
///
/// Implementations must swallow failure: durability is best effort and the
/// in-memory sequence stays the source of truth for the session.
pub trait Persist: Send {
    fn persist(&self, habits: &[Habit]);
}

/// Synchronous persistence straight into the slot, logging failures.
impl Persist for HabitSlot {
    fn persist(&self, habits: &[Habit]) {
        if let Err(e) = self.save(habits) {
            eprintln!("Warning: failed to save habits: {e}");
        }
    }
}

/// Background writer owning the slot; see the module docs.
pub struct PersistWriter {
    tx: Option<Sender<Vec<Habit>>>,
    handle: Option<JoinHandle<()>>,
}

impl PersistWriter {
    /// Spawn the writer thread over the given slot.
    pub fn spawn(slot: HabitSlot) -> Self {
        let (tx, rx) = mpsc::channel::<Vec<Habit>>();
        let handle = std::thread::spawn(move || {
            while let Ok(mut snapshot) = rx.recv() {
                // Drain anything already queued; each snapshot is the full
                // sequence, so only the newest needs to reach disk.
                loop {
                    match rx.try_recv() {
                        Ok(newer) => snapshot = newer,
                        Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                    }
                }
                slot.persist(&snapshot);
            }
        });
        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }
}

impl Persist for PersistWriter {
    fn persist(&self, habits: &[Habit]) {
        let Some(tx) = &self.tx else { return };
        // Send fails only when the writer thread is gone; the in-memory
        // state is still authoritative, so warn and move on.
        if tx.send(habits.to_vec()).is_err() {
            eprintln!("Warning: persistence writer is no longer running");
        }
    }
}

impl Drop for PersistWriter {
    fn drop(&mut self) {
        // Close the channel, then wait for the final write to land.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::seed_habits;
    use tempfile::TempDir;

    #[test]
    fn final_snapshot_lands_before_drop_returns() {
        let dir = TempDir::new().unwrap();
        let writer = PersistWriter::spawn(HabitSlot::open_in(dir.path()));

        let mut habits = seed_habits();
        for i in 0..20 {
            habits[0].streak = i;
            writer.persist(&habits);
        }
        drop(writer);

        let loaded = HabitSlot::open_in(dir.path()).load().unwrap().unwrap();
        assert_eq!(loaded[0].streak, 19);
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn writes_apply_in_send_order() {
        let dir = TempDir::new().unwrap();
        let writer = PersistWriter::spawn(HabitSlot::open_in(dir.path()));

        let habits = seed_habits();
        writer.persist(&habits);
        let shorter = habits[..1].to_vec();
        writer.persist(&shorter);
        drop(writer);

        let loaded = HabitSlot::open_in(dir.path()).load().unwrap().unwrap();
        assert_eq!(loaded, shorter);
    }

    #[test]
    fn slot_persist_swallows_write_failure() {
        // A directory path cannot be written as a file; persist must not panic.
        let dir = TempDir::new().unwrap();
        let slot = HabitSlot::with_path(dir.path().to_path_buf());
        slot.persist(&seed_habits());
    }
}
