use nvec::Vector;

type Vec4 = Vector<f64, 4>;

fn main() {
    env_logger::init();

    let a = Vec4::from([-1.0, 3.5, 0.0, 0.0]);
    let b = Vec4::from([2.0, 2.5, 0.0, 0.0]);
    log::info!("a = {a}, b = {b}");

    println!("{}", a + b);
    println!("{}", a - b);
    println!("{}", a * b);
    println!("{}", a / b);
    println!("{}", a.max(b));
    println!("{}", a.min(b));
    println!("{} {}", a.max_element(), a.argmax());
    println!("{} {}", b.max_element(), b.argmax());
    println!("{} {}", a.min_element(), a.argmin());
    println!("{} {}", b.min_element(), b.argmin());
    println!("{}", a.abs());
    println!("{}", a.sum());
    println!("{}", a.norm1());
    println!("{}", a.norm2());
    println!("{}", a.norm8());
    for p in [1.0, 2.0, 3.0, 4.0, 8.0, 16.0] {
        println!("{}", a.norm(p));
    }
    println!("{}", a.dot(b));
    println!("{}", a.exp());
    println!("{}", a.exp().ln());
    println!("{}", a.normalized());
    println!("{}", Vector::<f64, 6>::splat(3.1416));
    println!("{}", a.resize::<6>());
    println!("{}", Vector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).resize::<6>());

    let mut a = a;
    a += b;
    println!("{a}");
}
