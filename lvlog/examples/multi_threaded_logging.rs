use std::sync::{Arc, mpsc::channel};

use lvlog::{Severity, logger_config};

fn main() {
    let logger = Arc::new(
        logger_config()
            .with_level(Severity::Debug)
            .build()
            .expect("valid level"),
    );
    lvlog::info!(logger, "Hello, world!");
    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            let logger = Arc::clone(&logger);
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        lvlog::warn!(logger, "thread {i} received: {message}");
                    }
                    logger.debug(&[&"thread", &i, &"done"]);
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    let result = std::panic::catch_unwind(|| logger.fatal(&[&"shutting down"]));
    assert!(result.is_err());
}
