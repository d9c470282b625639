use sref::SharedRef;

#[test]
fn test_raw_pointer_end_to_end() {
    let original = unsafe { SharedRef::from_raw(Box::into_raw(Box::new(9))) };

    let copies = vec![original.clone(), original.clone(), original.clone()];

    for copy in &copies {
        assert_eq!(copy.to_string(), "9");
    }

    original.assign(&SharedRef::new(42));

    for copy in &copies {
        assert_eq!(*copy.borrow(), 42);
    }
}

#[test]
fn test_handles_as_fields_and_elements() {
    struct Person {
        name: &'static str,
    }

    struct Company {
        manager: SharedRef<Person>,
        employees: Vec<SharedRef<Person>>,
    }

    let ada = SharedRef::new(Person { name: "ada" });
    let company = Company {
        manager: ada.clone(),
        employees: vec![ada.clone(), SharedRef::new(Person { name: "grace" })],
    };

    company.manager.borrow_mut().name = "lovelace";

    // the manager is also the first employee
    assert_eq!(company.employees[0].borrow().name, "lovelace");
    assert_eq!(company.employees[1].borrow().name, "grace");
}

#[test]
fn test_value_assignment_across_owners() {
    let a = SharedRef::new(String::from("left"));
    let b = SharedRef::new(String::from("right"));
    let c = a.clone();

    a.assign(&b);

    // the copy sees the assigned value, the source keeps its own referent
    assert_eq!(*c.borrow(), "right");

    b.replace(String::from("changed"));

    assert_eq!(*a.borrow(), "right");
}
