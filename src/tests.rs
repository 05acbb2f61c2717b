//! Test utils.

use crate::domain::{Car, Field};

/// Builds a field and adds the given `(name, x, y, direction, commands)` cars in order.
pub fn field_with_cars(width: i32, height: i32, cars: &[(&str, i32, i32, &str, &str)]) -> Field {
    let mut field = Field::new(width, height).unwrap();
    for (name, x, y, direction, commands) in cars {
        field
            .add_car(Car::new(name, *x, *y, direction, commands).unwrap())
            .unwrap();
    }
    field
}
