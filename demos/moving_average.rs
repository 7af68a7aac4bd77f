//! Moving average of a price series through a push pipeline.

use rivulet::{collectors, StreamResult, UbStream};

fn main() -> StreamResult<()> {
    let prices = vec![
        110.0, 213.90, 311.69, 412.23, 512.1, 610.03, 1000.0, 2102.12,
    ];

    let averaging = collectors::averaging(|price: &f64| *price);
    let stream = UbStream::new(prices);
    let averages = stream
        .sliding(3)
        .map(move |window| averaging.apply(window));

    averages.for_each(|average| println!("{average:.3}"))?;
    Ok(())
}
