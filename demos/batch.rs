extern crate akima_spline;

use akima_spline::Spline;

fn main() {

    let x_min = 0.0;
    let x_max = 6.0;

    let spline = Spline::from_pairs(&[
        (x_min, 0.0),
        (1.0, 0.1),
        (2.0, 2.2),
        (3.0, 1.0),
        (4.0, 5.1),
        (5.0, 5.2),
        (x_max, 5.3)
    ]).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut x_vector = Vec::new();

    for i in 0..=number_of_steps {
        x_vector.push(x_min + step * i as f64);
    }

    let result = spline.evaluate_many(&x_vector);

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
