use std::fmt;

use linked_list::LinkedList;

struct Item {
    num: i32,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut xs = LinkedList::new();
    println!("{xs}");

    for i in 0..10 {
        xs.insert(i, 10 * i as i32)?;
    }

    let mut xs1 = xs.clone();

    xs.push_front(-1);
    xs.push_back(1000);
    xs.set(2, 11)?;

    xs1.push_back(100);

    let mut xs2 = LinkedList::new();
    xs2.clone_from(&xs1);
    xs2.push_back(200);
    xs2.set(1, 12)?;

    println!("{xs}");
    println!("{xs1}");
    println!("{xs2}");

    for i in 0..12 {
        println!("Elem at {i} is {}", xs.get(i)?);
    }

    let _x = xs[5];
    xs[6] = 600;

    for x in &xs {
        print!("{x} ");
    }
    println!();

    println!("{xs}");

    let mut ys = LinkedList::new();
    for i in 0..2 {
        ys.insert(i, Item { num: i as i32 })?;
    }
    println!("{ys}");

    let zs = LinkedList::from([1, 2, 3, 5]);
    println!("{zs}");

    let mut zs1 = LinkedList::from([1, 2, 3, 5, 6]);
    let stolen = std::mem::take(&mut zs1);
    println!("{stolen} (moved-from list is {zs1})");

    Ok(())
}
