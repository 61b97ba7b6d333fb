//! Declarations for enum and message nodes.

use protogen_core::csharp_string_literal;

use crate::{
    index::Scope,
    naming::NamingRules,
    unit::{ClassDecl, ConstructorSpec, EnumDecl, EnumMember, TypeRef},
};

/// Base type of every generated message class.
pub const PARAMETER_SET: &str = "ParameterSet";

/// Start an enum declaration; members are folded in as they are reduced.
pub fn enum_decl(name: &str, scope: &Scope, naming: &NamingRules) -> EnumDecl {
    EnumDecl::new(naming.member(name)).doc(format!("Values of `{}`.", scope.qualify(name)))
}

pub fn enum_member(name: &str, ordinal: i32, naming: &NamingRules) -> EnumMember {
    EnumMember::new(naming.member(name), ordinal)
}

/// Start a message class; one property per field is folded in later.
///
/// The constructor hands the fully qualified proto name to the base type so
/// the runtime can address the message.
pub fn message_class(name: &str, scope: &Scope, naming: &NamingRules) -> ClassDecl {
    let qualified = scope.qualify(name);
    ClassDecl::new(naming.member(name))
        .doc(format!("Parameters of `{qualified}`."))
        .base(TypeRef::named(PARAMETER_SET))
        .constructor(ConstructorSpec::new().delegate_base([csharp_string_literal(&qualified)]))
}

#[cfg(test)]
mod tests {
    use protogen_schema::NamespaceRemap;

    use super::*;
    use crate::unit::DelegationTarget;

    #[test]
    fn test_message_class_delegates_qualified_name() {
        let naming = NamingRules::new(&[NamespaceRemap::new("demo", "Demo")]);
        let scope = Scope::package("demo", &naming);
        let class = message_class("solver_params", &scope, &naming);

        assert_eq!(class.name, "SolverParams");
        assert_eq!(class.base, Some(TypeRef::named("ParameterSet")));
        let delegation = class.constructors[0].delegation.as_ref().unwrap();
        assert_eq!(delegation.target, DelegationTarget::Base);
        assert_eq!(delegation.args, vec!["\"demo.solver_params\""]);
    }

    #[test]
    fn test_enum_decl_and_members() {
        let naming = NamingRules::new(&[]);
        let scope = Scope::package("demo", &naming);
        let decl = enum_decl("Polarity", &scope, &naming)
            .member(enum_member("POLARITY_TRUE", 0, &naming));

        assert_eq!(decl.name, "Polarity");
        assert_eq!(decl.members, vec![EnumMember::new("PolarityTrue", 0)]);
    }
}
