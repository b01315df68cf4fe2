//! Walk through the PayPal fee calculator for a few amounts.

use plotcalc::PayPalCalculator;
use plotcalc::paypal::Side;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut calc = PayPalCalculator::default();
    println!("rate: {}", calc.schedule().describe());
    println!("send {} -> receive {}", calc.send(), calc.receive());

    for amount in std::env::args().skip(1) {
        if !calc.input(Side::Send, &amount) {
            eprintln!("not an amount: {}", amount);
            continue;
        }
        calc.blur(Side::Send);
        println!("send {} -> receive {}", calc.send(), calc.receive());

        calc.input(Side::Receive, &amount);
        calc.blur(Side::Receive);
        println!("to receive {} send {}", calc.receive(), calc.send());
    }
}
