//! Walk one learner through the isosceles fold lesson and print each step.
//!
//! Usage:
//!   cargo run -p trifold --example folding_walkthrough
//!
//! Prints the step, the overlap report and the current hint after every event.

use trifold::activity::Event;
use trifold::chips::REQUIRED_SAS_CHIPS;
use trifold::geom::create_isosceles_triangle;
use trifold::session::ActivitySession;

fn main() {
    let t = create_isosceles_triangle(4.0, 3.0, 0.0);
    let mut session = ActivitySession::new(t);

    let mut script = vec![
        Event::SetFoldAngle { angle: 45.0 },
        Event::CompleteStep,
        Event::SetFoldAngle { angle: 120.0 },
        Event::CompleteStep,
        Event::SelectAnswer {
            answer: "congruence".into(),
        },
        Event::CompleteStep,
    ];
    script.extend(REQUIRED_SAS_CHIPS.iter().map(|id| Event::CollectChip {
        chip_id: id.to_string(),
    }));
    script.extend([
        Event::CompleteStep,
        Event::SelectAnswer {
            answer: "needs-proof".into(),
        },
        Event::CompleteStep,
        Event::CompleteStep,
    ]);

    for ev in script {
        let label = format!("{ev:?}");
        let step = session.dispatch(ev).as_str();
        let overlap = session.overlap();
        println!(
            "{label:<48} -> {step:<13} overlap={:>5.1}%  progress={}/{}",
            overlap.overlap_percentage,
            session.registry().progress().collected,
            session.registry().progress().total,
        );
        if let Some(err) = &session.machine().context().error {
            println!("    error: {err}");
        }
    }
    let v = session.validate();
    println!("valid={} feedback={}", v.is_valid, v.feedback);
    println!("hint: {}", session.next_hint());
}
