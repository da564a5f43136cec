//! Single-owner async driver for a [`ZoomTransformController`].
//!
//! The controller is moved into one tokio task, the only place its state is
//! ever written. Callers on any thread send [`Command`]s through an ordered
//! channel and observe the result through a `watch` channel of
//! [`ViewTransform`]s. While something is animating the task ticks on a fixed
//! frame interval; when idle it only wakes for commands.

use crate::config::ZoomConfig;
use crate::controller::{ViewTransform, ZoomTransformController};
use crate::geometry::{Size, Vec2};
use crate::snapshot::ZoomSnapshot;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Default frame interval, roughly 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DriverError {
    #[error("zoom driver has shut down")]
    Closed,
}

/// One controller operation, processed in the order it was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetContainerSize(Size),
    SetImageSize(Size),
    ZoomIn(f32),
    ZoomOut(f32),
    Reset,
    DoubleTap(Vec2),
    Transform {
        centroid: Vec2,
        pan: Vec2,
        zoom_ratio: f32,
    },
    Reconfigure(ZoomConfig),
}

impl Command {
    fn apply(self, controller: &mut ZoomTransformController) {
        match self {
            Command::SetContainerSize(size) => controller.set_container_size(size),
            Command::SetImageSize(size) => controller.set_image_size(size),
            Command::ZoomIn(step) => controller.zoom_in(step),
            Command::ZoomOut(step) => controller.zoom_out(step),
            Command::Reset => controller.reset(),
            Command::DoubleTap(tap) => controller.on_double_tap(tap),
            Command::Transform {
                centroid,
                pan,
                zoom_ratio,
            } => controller.on_transform(centroid, pan, zoom_ratio),
            Command::Reconfigure(config) => controller.reconfigure(config),
        }
    }
}

enum Message {
    Command(Command),
    Snapshot(oneshot::Sender<ZoomSnapshot>),
    Shutdown(oneshot::Sender<ZoomTransformController>),
}

/// Handle to a running driver task. Dropping it cancels the task.
pub struct ZoomDriver {
    messages: mpsc::UnboundedSender<Message>,
    view: watch::Receiver<ViewTransform>,
    task: Option<JoinHandle<()>>,
}

impl ZoomDriver {
    /// Moves `controller` into a new task on the current tokio runtime.
    pub fn spawn(controller: ZoomTransformController, frame_interval: Duration) -> Self {
        let (messages, inbox) = mpsc::unbounded_channel();
        let (publish, view) = watch::channel(controller.view());
        let task = tokio::spawn(run(controller, inbox, publish, frame_interval));
        Self {
            messages,
            view,
            task: Some(task),
        }
    }

    pub fn send(&self, command: Command) -> Result<(), DriverError> {
        self.messages
            .send(Message::Command(command))
            .map_err(|_| DriverError::Closed)
    }

    /// A receiver that sees every published transform.
    pub fn subscribe(&self) -> watch::Receiver<ViewTransform> {
        self.view.clone()
    }

    /// The most recently published transform.
    pub fn current(&self) -> ViewTransform {
        *self.view.borrow()
    }

    /// Waits until all commands sent so far have been applied and no
    /// animation is running, then returns the settled transform.
    pub async fn settled(&self) -> Result<ViewTransform, DriverError> {
        // Round-trip through the queue so earlier commands are applied first.
        self.snapshot().await?;
        let mut view = self.view.clone();
        let settled = view
            .wait_for(|view| !view.animating)
            .await
            .map_err(|_| DriverError::Closed)?;
        Ok(*settled)
    }

    pub async fn snapshot(&self) -> Result<ZoomSnapshot, DriverError> {
        let (reply, response) = oneshot::channel();
        self.messages
            .send(Message::Snapshot(reply))
            .map_err(|_| DriverError::Closed)?;
        response.await.map_err(|_| DriverError::Closed)
    }

    /// Stops the task after the queued commands and hands the controller back.
    pub async fn shutdown(mut self) -> Result<ZoomTransformController, DriverError> {
        let (reply, response) = oneshot::channel();
        self.messages
            .send(Message::Shutdown(reply))
            .map_err(|_| DriverError::Closed)?;
        let controller = response.await.map_err(|_| DriverError::Closed)?;
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        Ok(controller)
    }
}

impl Drop for ZoomDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run(
    mut controller: ZoomTransformController,
    mut inbox: mpsc::UnboundedReceiver<Message>,
    publish: watch::Sender<ViewTransform>,
    frame_interval: Duration,
) {
    let mut ticker = tokio::time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    loop {
        let was_animating = controller.is_animating();

        tokio::select! {
            message = inbox.recv() => match message {
                Some(Message::Command(command)) => {
                    log::trace!("Driver command {command:?}");
                    command.apply(&mut controller);
                }
                Some(Message::Snapshot(reply)) => {
                    let _ = reply.send(controller.snapshot());
                }
                Some(Message::Shutdown(reply)) => {
                    log::debug!("Zoom driver shutting down");
                    let _ = reply.send(controller);
                    return;
                }
                None => {
                    log::debug!("Zoom driver handle dropped");
                    return;
                }
            },
            now = ticker.tick(), if was_animating => {
                controller.tick(now - last_frame);
                last_frame = now;
            }
        }

        if !was_animating && controller.is_animating() {
            // Measure the first frame of a new animation from now, not from
            // whenever the previous one ended.
            ticker.reset();
            last_frame = Instant::now();
        }

        publish.send_if_modified(|view| {
            let next = controller.view();
            let changed = *view != next;
            *view = next;
            changed
        });
    }
}
