pub mod sender_queue;
