use crate::{Error, Result};

use super::frame::{FrameTag, GenerationFrame, RootFrame};

/// Folds a popped child frame into the frame below it.
pub type Fold = fn(&mut GenerationFrame, GenerationFrame) -> Result<()>;

/// The shift-reduce stack driven by the traversal.
///
/// The bottom frame is always the root accumulator.
#[derive(Debug)]
pub struct ReductionStack {
    frames: Vec<GenerationFrame>,
    reductions: usize,
}

impl ReductionStack {
    /// A stack holding only an empty root accumulator.
    pub fn seeded() -> Self {
        Self {
            frames: vec![GenerationFrame::Root(RootFrame::default())],
            reductions: 0,
        }
    }

    pub fn push(&mut self, frame: GenerationFrame) {
        tracing::trace!(frame = %frame.tag(), depth = self.frames.len(), "push");
        self.frames.push(frame);
    }

    pub fn top(&self) -> Option<FrameTag> {
        self.frames.last().map(GenerationFrame::tag)
    }

    /// Tag of the frame directly below the top.
    pub fn below_top(&self) -> Option<FrameTag> {
        self.frames
            .len()
            .checked_sub(2)
            .map(|i| self.frames[i].tag())
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Total successful reductions so far.
    pub fn reductions(&self) -> usize {
        self.reductions
    }

    /// Fold the top frame into the one below it if their tags are `child`
    /// over `parent`. A mismatch leaves the stack untouched and returns `false`.
    pub fn reduce(&mut self, child: FrameTag, parent: FrameTag, fold: Fold) -> Result<bool> {
        if self.top() != Some(child) || self.below_top() != Some(parent) {
            return Ok(false);
        }
        let Some(child_frame) = self.frames.pop() else {
            return Ok(false);
        };
        let Some(parent_frame) = self.frames.last_mut() else {
            return Err(Error::protocol(format!("{child} frame lost its {parent} parent")));
        };
        fold(parent_frame, child_frame)?;
        self.reductions += 1;
        tracing::debug!(%child, %parent, depth = self.frames.len(), "reduced");
        Ok(true)
    }

    /// Consume the stack, which must hold nothing but the root accumulator.
    pub fn into_root(mut self) -> Result<RootFrame> {
        if self.frames.len() != 1 {
            let leftover: Vec<String> = self
                .frames
                .iter()
                .skip(1)
                .map(|f| f.tag().to_string())
                .collect();
            return Err(Error::protocol(format!(
                "unreduced frames left after traversal: {}",
                leftover.join(", ")
            )));
        }
        match self.frames.pop() {
            Some(GenerationFrame::Root(root)) => Ok(root),
            Some(other) => Err(Error::protocol(format!(
                "stack bottom is a {} frame, expected root",
                other.tag()
            ))),
            None => Err(Error::protocol("stack is empty")),
        }
    }
}
