//! Command handlers, grouped by concern.

mod control;
mod crud;
mod queries;

use super::registry::CommandRegistry;

/// Build the registry with the full verb set.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("help", Box::new(control::Help));
    registry.register("info", Box::new(queries::Info));
    registry.register("show", Box::new(queries::Show));
    registry.register("add", Box::new(crud::Add));
    registry.register("update", Box::new(crud::Update));
    registry.register("remove_by_id", Box::new(crud::RemoveById));
    registry.register("clear", Box::new(crud::Clear));
    registry.register("save", Box::new(control::Save));
    registry.register("execute_script", Box::new(control::ExecuteScript));
    registry.register("exit", Box::new(control::Exit));
    registry.register("add_if_min", Box::new(crud::AddIfMin));
    registry.register("remove_greater", Box::new(crud::RemoveGreater));
    registry.register("remove_lower", Box::new(crud::RemoveLower));
    registry.register("average_of_height", Box::new(queries::AverageOfHeight));
    registry.register("count_by_hair_color", Box::new(queries::CountByHairColor));
    registry.register(
        "filter_less_than_hair_color",
        Box::new(queries::FilterLessThanHairColor),
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_the_verb_set() {
        let registry = default_registry();
        assert_eq!(registry.len(), 16);
        for verb in [
            "help",
            "info",
            "show",
            "add",
            "update",
            "remove_by_id",
            "clear",
            "save",
            "execute_script",
            "exit",
            "add_if_min",
            "remove_greater",
            "remove_lower",
            "average_of_height",
            "count_by_hair_color",
            "filter_less_than_hair_color",
        ] {
            assert!(registry.get(verb).is_some(), "missing verb {verb}");
        }
    }
}
