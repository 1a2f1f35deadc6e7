use glam::Vec3;

/// Lighting map a sampler uniform reads from. The renderer decides which
/// texture unit backs each slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MapSlot {
    Diffuse,
    Specular
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Sampler(MapSlot)
}

/// GLSL uniform names mapped to the values uploaded for them, kept in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformTable {
    entries: Vec<(String, UniformValue)>
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setting a name twice overwrites the first value but keeps its slot.
    pub fn set(&mut self, name: impl Into<String>, value: UniformValue) {
        let name = name.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value))
        }
    }

    pub fn set_int(&mut self, name: impl Into<String>, value: i32) {
        self.set(name, UniformValue::Int(value));
    }

    pub fn set_float(&mut self, name: impl Into<String>, value: f32) {
        self.set(name, UniformValue::Float(value));
    }

    pub fn set_vec3(&mut self, name: impl Into<String>, value: Vec3) {
        self.set(name, UniformValue::Vec3(value));
    }

    pub fn set_sampler(&mut self, name: impl Into<String>, slot: MapSlot) {
        self.set(name, UniformValue::Sampler(slot));
    }

    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.entries.iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_insertion_order() {
        let mut table = UniformTable::new();
        table.set_float("a", 1.0);
        table.set_vec3("b", Vec3::ONE);
        table.set_float("a", 2.0);

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(table.get("a"), Some(UniformValue::Float(2.0)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_name_is_none() {
        let mut table = UniformTable::new();
        assert!(table.is_empty());
        table.set_sampler("material.diffuse", MapSlot::Diffuse);

        assert_eq!(table.get("material.specular"), None);
        assert_eq!(table.get("material.diffuse"), Some(UniformValue::Sampler(MapSlot::Diffuse)));
    }
}
