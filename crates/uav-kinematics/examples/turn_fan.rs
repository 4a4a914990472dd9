use uav_kinematics::*;

fn main() {
    let max_turn_angle = 5.0;
    let step_size = 1.0;
    let model_result = MotionModel::new(max_turn_angle, step_size);

    let start = Point::new(0.0, 0.0);
    let heading = 358.0;

    match model_result {
        Ok(model) => {
            println!("Motion model: {}", model);
            println!("  Start:   {} heading {:.1} deg", start, heading);
            println!("  Branching factor: {}", model.branching_factor());
            println!();

            for offset in model.turn_offsets() {
                let (next, next_heading) = model.successor(&start, heading, offset);
                println!(
                    "Offset {:>3}: heading {:>6.1} deg -> ({:.3},{:.3})",
                    offset, next_heading, next.x, next.y
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to build motion model: {}", e);
            eprintln!(
                "Please ensure step_size ({}) is positive and max_turn_angle ({}) is within [0, 360].",
                step_size, max_turn_angle
            );
        }
    }
}
