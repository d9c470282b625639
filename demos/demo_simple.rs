use sref::SharedRef;

fn widen(value: SharedRef<i32>) -> SharedRef<f64> {
    SharedRef::new(f64::from(*value.borrow()))
}

pub fn main() {
    let value = widen(SharedRef::new(10));

    println!("{}", value);

    let next = *value.borrow() + 1.0;
    value.replace(next);

    println!("{}", value);
}
