use tokio::sync::mpsc;

/// A generic channel for delivering notifications between components
pub struct Channel<T> {
    tx: mpsc::Sender<T>,
    rx: mpsc::Receiver<T>,
}

impl<T> Channel<T> {
    /// Create a new channel with the specified buffer size
    pub fn new(buffer_size: usize) -> Self {
        let (tx, rx) = mpsc::channel(buffer_size);
        Self { tx, rx }
    }

    /// Split the channel into sender and receiver
    pub fn split(self) -> (Sender<T>, Receiver<T>) {
        (Sender { tx: self.tx }, Receiver { rx: self.rx })
    }
}

/// A sender for delivering notifications
#[derive(Clone)]
pub struct Sender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> Sender<T> {
    /// Send a notification, waiting for buffer space
    pub async fn send(&self, data: T) -> Result<(), mpsc::error::SendError<T>> {
        self.tx.send(data).await
    }

    /// Send a notification without waiting; fails if the buffer is full
    /// or the receiving side is gone
    pub fn try_send(&self, data: T) -> Result<(), mpsc::error::TrySendError<T>> {
        self.tx.try_send(data)
    }
}

/// A receiver for notifications
pub struct Receiver<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> Receiver<T> {
    /// Receive the next notification; `None` once the sending side is gone
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}
