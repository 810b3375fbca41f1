extern crate akima_spline;

use akima_spline::{Knot, Spline};

fn main() {

    let knots = vec![
        Knot::new(1.0, 1.0),
        Knot::new(2.0, 0.0),
        Knot::new(3.0, -2.0),
        Knot::new(4.0, 1.0),
        Knot::new(5.0, 1.0)
    ];

    let spline = Spline::build(knots).unwrap();

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.evaluate(x));
    }
}
