use msgheap::config::{get_config, Config, DEFAULT_CONFIG_PATH};
use msgheap::driver::{self, dto::EnqueueRequest};
use msgheap::PriorityMessageQueue;
use simple_logger::SimpleLogger;
use std::path::Path;
use std::process::ExitCode;

fn load_config() -> Config {
    if !Path::new(DEFAULT_CONFIG_PATH).exists() {
        return Config::default();
    }

    let cfg = match get_config(DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}, using defaults");
            return Config::default();
        }
    };

    if !cfg.has_valid_log_level() {
        eprintln!("unknown log_level {:?}, using info", cfg.log_level);
    }

    cfg
}

fn run(queue: &mut PriorityMessageQueue) -> Result<(), driver::DriverError> {
    let requests = [
        EnqueueRequest {
            id: 0,
            command: 1,
            priority: 1,
            error_code: 0,
            data: "hello".to_string(),
        },
        EnqueueRequest {
            id: 0,
            command: 1,
            priority: 0,
            error_code: 0,
            data: "test".to_string(),
        },
    ];

    for req in requests {
        println!("enqueue: {}", driver::enqueue_handler(queue, req)?);
    }

    if let Some(peeked) = driver::peek_handler(queue)? {
        println!("peek: {peeked}");
    }

    if let Some(popped) = driver::dequeue_handler(queue)? {
        println!("pop: {popped}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cfg = load_config();

    if let Err(e) = SimpleLogger::new().with_level(cfg.level_filter()).init() {
        eprintln!("logger error: {}", e);
    }

    let mut queue = match PriorityMessageQueue::new(cfg.initial_capacity) {
        Ok(q) => q,
        Err(e) => {
            log::error!("Error creating queue: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut queue);
    queue.destroy();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
