//! Shape generation off the render thread.
//!
//! Each request runs on the tokio blocking pool and reports back over an
//! unbounded channel that the session drains once per frame. Ordering and
//! staleness are the morph controller's job; the worker just delivers.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;
use voxel_engine::{ShapeError, ShapeGenerator, ShapeTicket};

pub type ShapeResult = (ShapeTicket, Result<Vec<Vec3>, ShapeError>);

pub struct ShapeWorker {
    handle: Handle,
    generator: ShapeGenerator,
    count: usize,
    seed: u64,
    tx: Option<mpsc::UnboundedSender<ShapeResult>>,
    rx: mpsc::UnboundedReceiver<ShapeResult>,
}

impl ShapeWorker {
    pub fn new(handle: Handle, generator: ShapeGenerator, count: usize, seed: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            generator,
            count,
            seed,
            tx: Some(tx),
            rx,
        }
    }

    /// Start generating `ticket.shape`. Sampling is seeded from the worker
    /// seed and the ticket sequence, so a run is reproducible.
    pub fn submit(&self, ticket: ShapeTicket) {
        let Some(tx) = self.tx.clone() else {
            debug!(seq = ticket.seq, "worker closed, dropping shape request");
            return;
        };
        let generator = self.generator.clone();
        let count = self.count;
        let seed = self.seed.wrapping_add(ticket.seq);
        self.handle.spawn_blocking(move || {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = generator.generate(ticket.shape, count, &mut rng);
            // A closed receiver means teardown has begun.
            let _ = tx.send((ticket, result));
        });
    }

    /// A finished result, if one is waiting.
    pub fn try_next(&mut self) -> Option<ShapeResult> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished result.
    pub async fn next(&mut self) -> Option<ShapeResult> {
        self.rx.recv().await
    }

    /// Stop accepting work and discard anything already delivered.
    /// Generations still running finish into a closed channel.
    pub fn close(&mut self) {
        self.tx = None;
        self.rx.close();
        let mut dropped = 0usize;
        while self.rx.try_recv().is_ok() {
            dropped += 1;
        }
        if dropped > 0 {
            debug!(dropped, "discarded shape results after teardown");
        }
    }
}
