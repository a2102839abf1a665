use std::time::Duration;

use pull_iter::{ChanIter, ChannelOptions, PullIter, count, filter, last, map};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

fn main() -> anyhow::Result<()> {
    TermLogger::init(
        LevelFilter::Trace,
        Default::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let options = ChannelOptions::new().capacity(4).thread_name("squares");
    let squares = ChanIter::spawn(options, |sender| {
        for i in 0u64..20 {
            std::thread::sleep(Duration::from_millis(5));
            if sender.send_blocking(i * i).is_err() {
                return;
            }
        }
    })?;

    let mut evens = filter(map(squares, |n| n + 1), |n| n % 2 == 0);
    println!("first: {:?}", evens.next());
    println!("skipped: {}", evens.advance(3));
    println!("last: {:?}", last(&mut evens));
    println!("left over: {}", count(evens));
    Ok(())
}
