//! Walks through the wrapper types and the bulk views, printing one line
//! per check. Exits nonzero if any check fails.

use std::convert::TryFrom;
use std::process::exit;

use nullsafety::slice::{as_deref_checked_slice, as_notnull_slice};
use nullsafety::{DerefChecked, NotNull};

fn check(name: &str, passed: bool) -> bool {
    if passed {
        println!("ok   {}", name);
    } else {
        println!("FAIL {}", name);
    }
    passed
}

fn main() {
    let mut all = true;

    all &= check("notnull accepts a live address", {
        let x = 2;
        let p = NotNull::new(&x as *const i32).unwrap();
        unsafe { **p == 2 }
    });

    all &= check("notnull rejects null at the boundary", {
        NotNull::new(std::ptr::null::<i32>()).is_err()
    });

    all &= check("notnull assignment rolls back on a null candidate", {
        let mut p = NotNull::new(3).unwrap();
        p.set(0).is_err() && *p.get() == 3
    });

    all &= check("zero is falsy for integers, negative values are not", {
        NotNull::new(0).is_err() && NotNull::new(-4).is_ok()
    });

    all &= check("deref_checked defers the failure to dereference time", {
        let mut d: DerefChecked<Option<&i32>> = DerefChecked::null();
        let failed_while_null = d.try_deref().is_err();

        let y = 7;
        d.set(Some(&y));
        failed_while_null && *d.try_deref().unwrap() == 7
    });

    all &= check("exchange returns the previous contents", {
        let mut u = NotNull::new(Some(Box::new(4))).unwrap();
        let old = u.exchange(Some(Box::new(5))).unwrap();
        let v = NotNull::try_from(old).unwrap();
        *u.get_deref() == 5 && *v.get_deref() == 4
    });

    all &= check("a buffer with a null element fails the notnull view", {
        let a = [0, 1];
        let v = [&a[0] as *const i32, std::ptr::null(), &a[1] as *const i32];
        as_notnull_slice(&v).is_err()
    });

    all &= check("the same buffer is fine as a deref_checked view", {
        let a = [0, 1];
        let v = [&a[0] as *const i32, std::ptr::null(), &a[1] as *const i32];
        let dcs = as_deref_checked_slice(&v);
        dcs[0].is_truthy() && dcs[1].is_null() && unsafe { **dcs[2].get() == 1 }
    });

    if all {
        println!("All checks passed.");
    } else {
        exit(1);
    }
}
