use crate::Tree;

/// Integer 3D vector, e.g. a block position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

fn component_keys(code: &str) -> [String; 3] {
    [format!("{code}X"), format!("{code}Y"), format!("{code}Z")]
}

impl Tree {
    /// Reads a vector stored as the ints `<code>X`, `<code>Y`, `<code>Z`.
    ///
    /// `None` unless all three are present as ints.
    pub fn get_vec3i(&self, code: &str) -> Option<Vec3i> {
        let [x, y, z] = component_keys(code);
        Some(Vec3i::new(
            self.try_get_int(&x)?,
            self.try_get_int(&y)?,
            self.try_get_int(&z)?,
        ))
    }

    pub fn set_vec3i(&mut self, code: &str, value: Vec3i) {
        let [x, y, z] = component_keys(code);
        self.set_int(x, value.x);
        self.set_int(y, value.y);
        self.set_int(z, value.z);
    }

    /// Reads vectors stored as three parallel int arrays.
    ///
    /// `None` if any array is missing or their lengths differ.
    pub fn get_vec3is(&self, code: &str) -> Option<Vec<Vec3i>> {
        let [x, y, z] = component_keys(code);
        let (xs, ys, zs) = (
            self.try_get_int_array(&x)?,
            self.try_get_int_array(&y)?,
            self.try_get_int_array(&z)?,
        );
        if xs.len() != ys.len() || xs.len() != zs.len() {
            return None;
        }
        Some(
            xs.iter()
                .zip(ys)
                .zip(zs)
                .map(|((&x, &y), &z)| Vec3i::new(x, y, z))
                .collect(),
        )
    }

    pub fn set_vec3is(&mut self, code: &str, values: &[Vec3i]) {
        let [x, y, z] = component_keys(code);
        self.set_int_array(x, values.iter().map(|v| v.x).collect::<Vec<_>>());
        self.set_int_array(y, values.iter().map(|v| v.y).collect::<Vec<_>>());
        self.set_int_array(z, values.iter().map(|v| v.z).collect::<Vec<_>>());
    }
}
