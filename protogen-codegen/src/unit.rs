//! Declarative compilation unit descriptions.
//!
//! These types describe *what* a generated artifact contains. They carry no
//! syntax; turning them into text is the job of a
//! [`UnitRenderer`](crate::language::UnitRenderer).

use std::fmt;

/// One generated artifact: a namespace, its imports and one type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    /// Dot separated namespace path.
    pub namespace: String,
    /// Imported namespaces, sorted and deduplicated.
    pub usings: Vec<String>,
    /// The declared type.
    pub decl: TypeDecl,
}

impl CompilationUnit {
    pub fn new(namespace: impl Into<String>, decl: impl Into<TypeDecl>) -> Self {
        Self {
            namespace: namespace.into(),
            usings: Vec::new(),
            decl: decl.into(),
        }
    }

    /// Import a namespace. Imports of the unit's own namespace are dropped.
    pub fn using(mut self, namespace: impl Into<String>) -> Self {
        self.add_using(namespace);
        self
    }

    pub fn add_using(&mut self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        if namespace.is_empty() || namespace == self.namespace {
            return;
        }
        if let Err(pos) = self.usings.binary_search(&namespace) {
            self.usings.insert(pos, namespace);
        }
    }

    pub fn type_name(&self) -> &str {
        self.decl.name()
    }

    /// Namespace-qualified type name.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.type_name().to_string()
        } else {
            format!("{}.{}", self.namespace, self.type_name())
        }
    }
}

/// A class-like or enum-like type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Class(ClassDecl),
    Enum(EnumDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Class(class) => &class.name,
            TypeDecl::Enum(decl) => &decl.name,
        }
    }
}

impl From<ClassDecl> for TypeDecl {
    fn from(class: ClassDecl) -> Self {
        TypeDecl::Class(class)
    }
}

impl From<EnumDecl> for TypeDecl {
    fn from(decl: EnumDecl) -> Self {
        TypeDecl::Enum(decl)
    }
}

/// A reference to a (possibly generic) type, e.g. `Parameter<double>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub doc: Option<String>,
    pub base: Option<TypeRef>,
    pub constructors: Vec<ConstructorSpec>,
    pub properties: Vec<Property>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            base: None,
            constructors: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    pub fn constructor(mut self, ctor: ConstructorSpec) -> Self {
        self.constructors.push(ctor);
        self
    }

    pub fn constructors(mut self, ctors: impl IntoIterator<Item = ConstructorSpec>) -> Self {
        self.constructors.extend(ctors);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub doc: Option<String>,
    pub members: Vec<EnumMember>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }
}

/// An enum member with its explicit ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub ordinal: i32,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, ordinal: i32) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// A read-only property with an optional initializer expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: TypeRef,
    pub initializer: Option<String>,
    pub doc: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer: None,
            doc: None,
        }
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Declarative description of one constructor to synthesize.
///
/// ```
/// use protogen_codegen::unit::{ConstructorSpec, DelegationTarget, TypeRef};
///
/// let ctor = ConstructorSpec::new()
///     .param("value", TypeRef::named("double"))
///     .delegate_base(["value", "36"]);
///
/// let delegation = ctor.delegation.unwrap();
/// assert_eq!(delegation.target, DelegationTarget::Base);
/// assert_eq!(delegation.args, vec!["value", "36"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorSpec {
    pub params: Vec<Param>,
    pub delegation: Option<Delegation>,
}

impl ConstructorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty,
        });
        self
    }

    /// Delegate to another constructor of the same type.
    pub fn delegate_this(self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.delegate(DelegationTarget::This, args)
    }

    /// Delegate to a base type constructor.
    pub fn delegate_base(self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.delegate(DelegationTarget::Base, args)
    }

    fn delegate(
        mut self,
        target: DelegationTarget,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.delegation = Some(Delegation {
            target,
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

/// The constructor a synthesized constructor chains to.
#[derive(Debug, Clone, PartialEq)]
pub struct Delegation {
    pub target: DelegationTarget,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationTarget {
    /// Another constructor of the current type.
    This,
    /// A constructor of the base type.
    Base,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usings_sorted_and_deduplicated() {
        let unit = CompilationUnit::new("Demo", EnumDecl::new("Color"))
            .using("System")
            .using("Protogen.Runtime")
            .using("System")
            .using("Demo")
            .using("");
        assert_eq!(unit.usings, vec!["Protogen.Runtime", "System"]);
    }

    #[test]
    fn test_qualified_name() {
        let unit = CompilationUnit::new("Google.OrTools.Sat", ClassDecl::new("SatParameters"));
        assert_eq!(unit.qualified_name(), "Google.OrTools.Sat.SatParameters");
        let unit = CompilationUnit::new("", EnumDecl::new("Color"));
        assert_eq!(unit.qualified_name(), "Color");
    }

    #[test]
    fn test_type_ref_display() {
        let ty = TypeRef::generic(
            "Dictionary",
            vec![
                TypeRef::named("string"),
                TypeRef::generic("List", vec![TypeRef::named("int")]),
            ],
        );
        assert_eq!(ty.to_string(), "Dictionary<string, List<int>>");
        assert_eq!(TypeRef::named("double").to_string(), "double");
    }

    #[test]
    fn test_constructor_this_delegation() {
        let ctor = ConstructorSpec::new().delegate_this(["double.NaN"]);
        assert!(ctor.params.is_empty());
        assert_eq!(
            ctor.delegation,
            Some(Delegation {
                target: DelegationTarget::This,
                args: vec!["double.NaN".to_string()],
            })
        );
    }
}
