use std::cell::RefCell;
use std::rc::Rc;

use sref::{SharedRef, Upcast};

struct Person {
    name: &'static str,
}

struct Company {
    manager: SharedRef<Person>,
    employees: Vec<SharedRef<Person>>,
}

trait Animal {
    fn speak(&self) -> &'static str;
}

struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "woof"
    }
}

impl Upcast<dyn Animal> for Dog {
    fn upcast(this: Rc<RefCell<Dog>>) -> Rc<RefCell<dyn Animal>> {
        this
    }
}

pub fn main() {
    // easy to create from a heap allocation
    let p1 = unsafe { SharedRef::from_raw(Box::into_raw(Box::new(9))) };

    // copy shared ownership of the referent
    let p3 = p1.clone();
    println!("{}", p3);

    // plain arithmetic through borrows
    let p4 = *p1.borrow() + *p3.borrow();
    println!("i32: {}", p4);

    // works with complex types
    let p_str = SharedRef::new(String::from("hello world!"));
    println!("{}", p_str);

    let numbers = SharedRef::new(vec![1; 10]);
    println!("v[0] = {}", numbers.borrow()[0]);

    // allowed inside vectors; prints '123'
    let vshared = vec![SharedRef::new(1), SharedRef::new(2), SharedRef::new(3)];
    println!("{}{}{}", vshared[0], vshared[1], vshared[2]);

    // shared ownership as struct fields
    let manager = SharedRef::new(Person { name: "ada" });
    let company = Company {
        manager: manager.clone(),
        employees: vec![manager, SharedRef::new(Person { name: "grace" })],
    };
    println!(
        "{} manages {} employees",
        company.manager.borrow().name,
        company.employees.len()
    );

    // declared is-a conversions share the referent
    let dog = SharedRef::new(Dog);
    let animal: SharedRef<dyn Animal> = dog.upcast();
    println!("{}", animal.borrow().speak());
}
