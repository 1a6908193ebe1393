//! Bounded buffer for commands collected between ticks.

use arrayvec::ArrayVec;

use crate::types::Command;

/// Most commands kept per tick. A human cannot press this many keys in 33ms.
pub const QUEUE_CAPACITY: usize = 32;

/// Fixed-capacity FIFO of commands. Never allocates.
///
/// When full, movement commands are dropped but `Quit` and `Retry` still
/// replace the oldest entry so the session always sees them.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: ArrayVec<Command, QUEUE_CAPACITY>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Returns false if it was dropped.
    pub fn push(&mut self, command: Command) -> bool {
        if self.commands.try_push(command).is_ok() {
            return true;
        }
        if command.is_meta() {
            self.commands.remove(0);
            self.commands.push(command);
            return true;
        }
        false
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Remove and yield every queued command in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.commands.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_arrival_order() {
        let mut q = CommandQueue::new();
        q.push(Command::MoveLeft);
        q.push(Command::Rotate);
        q.push(Command::HardDrop);
        assert_eq!(
            q.as_slice(),
            &[Command::MoveLeft, Command::Rotate, Command::HardDrop]
        );
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(drained.len(), 3);
        assert!(q.is_empty());
    }

    #[test]
    fn test_full_queue_drops_moves_but_keeps_quit() {
        let mut q = CommandQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            assert!(q.push(Command::SoftDrop));
        }
        assert!(!q.push(Command::MoveLeft));
        assert_eq!(q.len(), QUEUE_CAPACITY);

        assert!(q.push(Command::Quit));
        assert_eq!(q.len(), QUEUE_CAPACITY);
        assert_eq!(q.as_slice().last(), Some(&Command::Quit));
    }
}
