// Communication channels lock-free

use crate::messaging::control::Control;
use crate::messaging::notification::Notification;
use ringbuf::{HeapRb, traits::Split};

pub type ControlProducer = ringbuf::HeapProd<Control>;
pub type ControlConsumer = ringbuf::HeapCons<Control>;

pub fn create_control_channel(capacity: usize) -> (ControlProducer, ControlConsumer) {
    let rb = HeapRb::<Control>::new(capacity);
    rb.split()
}

pub type NotificationProducer = ringbuf::HeapProd<Notification>;
pub type NotificationConsumer = ringbuf::HeapCons<Notification>;

pub fn create_notification_channel(
    capacity: usize,
) -> (NotificationProducer, NotificationConsumer) {
    let rb = HeapRb::<Notification>::new(capacity);
    rb.split()
}
