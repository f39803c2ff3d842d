//! Solana Vanity Address Generator CLI
//!
//! Usage:
//!   sol_vanity -p Sol                  # Find address starting with "Sol"
//!   sol_vanity -s AAaA                 # Find address ending with "AAaA"
//!   sol_vanity -p So -s 99 -n 5        # Find 5 addresses with both
//!   sol_vanity -p Sol -m mnemonic      # Derive keys from fresh mnemonics

use std::process;
use std::time::Duration;

use clap::Parser;

use sol_vanity::{Config, Pattern, Recorder, WorkerPool};

fn main() {
    let config = Config::parse();

    // Validate configuration before any worker starts
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let pattern = Pattern::new(config.prefix.clone(), config.suffix.clone());

    let recorder = match &config.output {
        Some(path) => Recorder::with_path(path.clone()),
        None => Recorder::new(),
    };

    // Print startup info
    println!("Solana Vanity Address Generator");
    println!("================================");
    println!("Mode:       {}", config.mode);
    println!("Prefix:     '{}'", pattern.prefix());
    println!("Suffix:     '{}'", pattern.suffix());
    println!("Difficulty: {}", pattern.difficulty_description());
    println!("Workers:    {}", config.worker_count());
    println!("Target:     {} address(es)", config.count);
    println!("Output:     {}", recorder.path().display());
    println!();

    // Create worker pool
    let mut pool = WorkerPool::new(
        config.worker_count(),
        pattern,
        config.mode,
        config.count,
    );

    // Set up ctrl-c handler
    let stop_flag = pool.stop_flag_clone();
    ctrlc_handler(stop_flag);

    println!("Searching... (Press Ctrl+C to stop)\n");

    let mut found = 0u64;
    let report_interval = Duration::from_secs(config.report_interval);
    let mut interrupted = false;

    loop {
        // Wait for result or timeout for a progress report
        match pool.wait_for_result(report_interval) {
            Some(result) => {
                found += 1;
                print_result(&result);

                if let Err(e) = recorder.record(&result) {
                    eprintln!("Warning: failed to write result file: {}", e);
                }

                if found >= config.count {
                    println!("Target reached! Found {} address(es).", found);
                    break;
                }
            }
            None => print_progress(&pool),
        }

        // Check if we should stop (ctrl-c was pressed)
        if pool.is_stopped() {
            interrupted = true;
            break;
        }
    }

    // Join the workers before reading the final counters; an interrupt may
    // have left registered matches queued on the channel, and those must
    // reach the result file before the summary
    pool.stop();
    pool.join();

    while let Some(result) = pool.try_recv() {
        print_result(&result);
        if let Err(e) = recorder.record(&result) {
            eprintln!("Warning: failed to write result file: {}", e);
        }
    }

    let snapshot = pool.snapshot();

    if interrupted {
        println!("\nInterrupted; generated {} vanity address(es).", snapshot.found);
    }

    println!("\n--- Final Statistics ---");
    println!("Addresses found:  {} (saved to {})", snapshot.found, recorder.path().display());
    println!("Total attempts:   {}", format_number(snapshot.total_attempts));
    if snapshot.found > 0 {
        println!(
            "Attempts/address: {}",
            format_number(snapshot.total_attempts / snapshot.found)
        );
    }
    println!("Time elapsed:     {:.2}s", pool.elapsed().as_secs_f64());
    println!(
        "Average speed:    {}/s",
        format_number(pool.attempts_per_second() as u64)
    );
}

fn print_result(result: &sol_vanity::VanityResult) {
    println!("=== Match #{} ===", result.sequence);
    println!("Address:              {}", result.address);
    if let Some(mnemonic) = &result.mnemonic {
        println!("Mnemonic:             {}", mnemonic);
    }
    println!("Private key (Phantom):  {}", result.keypair_base58());
    println!("Private key (Solflare): {}", result.private_key_base58());
    println!();
}

fn print_progress(pool: &WorkerPool) {
    let elapsed = pool.elapsed().as_secs();

    match pool.progress() {
        Some(report) => println!(
            "[{:>4}s] {} attempts ({}/s, ETA {})",
            elapsed,
            format_number(report.attempts),
            format_number(report.rate as u64),
            report.eta_display()
        ),
        None => println!(
            "[{:>4}s] {} attempts",
            elapsed,
            format_number(pool.snapshot().total_attempts)
        ),
    }
}

fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.2}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn ctrlc_handler(stop_flag: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    ctrlc::set_handler(move || {
        stop_flag.store(true, std::sync::atomic::Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");
}
