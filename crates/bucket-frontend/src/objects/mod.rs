//! The semantic object model. Every class, method and field of a program gets
//! an [`Object`], and all objects are owned by a single [`Module`] and referred
//! to by [`ObjectId`]. Classes are scopes: each maps the names declared in its
//! body to the objects they declare, and name lookup goes outward through the
//! enclosing classes up to the module.
//!
//! Declarations are registered in a single pass, in order, so a name can only
//! be used after the declaration introducing it.

mod declare;
mod scope;

#[cfg(test)]
mod tests;

pub use scope::Scope;

use bucket_common::message::{Error, Result};
use log::info;

use crate::ast::{self, Expression, Name};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObjectId(usize);

#[derive(Debug)]
pub enum Object {
    Class(Class),
    Method(Method),
    Field(Field),
}

impl Object {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => &class.name,
            Self::Method(method) => &method.name,
            Self::Field(field) => &field.name,
        }
    }

    /// The class this object is declared in, or `None` for the module.
    pub fn parent(&self) -> Option<ObjectId> {
        match self {
            Self::Class(class) => class.parent,
            Self::Method(method) => Some(method.parent),
            Self::Field(field) => Some(field.parent),
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Class {
    pub name: Name,
    pub parent: Option<ObjectId>,
    pub scope: Scope,
}

#[derive(Debug)]
pub struct Method {
    pub name: Name,
    pub parent: ObjectId,
    pub arguments: Vec<Parameter>,
    pub return_type: Option<ObjectId>,
}

/// A resolved method argument.
#[derive(Debug)]
pub struct Parameter {
    pub name: Name,
    pub class: ObjectId,
}

#[derive(Debug)]
pub struct Field {
    pub name: Name,
    pub parent: ObjectId,
    pub class: ObjectId,
}

/// The owner of every object. The module itself is the root class, and is
/// always the object with id [`Module::ROOT`].
#[derive(Debug)]
pub struct Module {
    objects: Vec<Object>,
}

impl Module {
    pub const ROOT: ObjectId = ObjectId(0);

    /// Create a module for the given class, with nothing declared yet.
    pub fn new(class: &ast::Class) -> Self {
        Self {
            objects: vec![Object::Class(Class {
                name: class.name.clone(),
                parent: None,
                scope: Scope::default(),
            })],
        }
    }

    /// Build and initialise the module for a parsed program.
    pub fn analyze(class: &ast::Class) -> Result<Self> {
        let mut module = Self::new(class);
        module.init(class)?;
        Ok(module)
    }

    /// Declare everything in the body of `class` in the module scope.
    pub fn init(&mut self, class: &ast::Class) -> Result<()> {
        info!("declaring names of '{}'", class.name);

        self.declare_class(Self::ROOT, class)?;

        info!("declared {} objects", self.objects.len());
        Ok(())
    }

    /// The id of the module class itself.
    pub fn root(&self) -> ObjectId {
        Self::ROOT
    }

    pub fn get(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    /// Find the object `name` refers to when used inside `scope`, looking
    /// through the enclosing classes if `scope` doesn't declare it.
    pub fn lookup(&self, scope: ObjectId, name: &str) -> Option<ObjectId> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let object = self.get(id);
            if let Some(found) = object.as_class().and_then(|class| class.scope.get(name)) {
                return Some(found);
            }

            current = object.parent();
        }

        None
    }

    /// Resolve a type expression used inside `scope` to the class it names.
    /// Only plain names are supported.
    pub fn lookup_class(&self, scope: ObjectId, expression: &Expression) -> Result<ObjectId> {
        let at = expression.span.begin;

        let Some(name) = expression.as_identifier() else {
            return Err(Error::resolve_unsupported_type(at));
        };

        let id = self
            .lookup(scope, name)
            .ok_or_else(|| Error::resolve_unknown_name(at, name))?;

        match self.get(id) {
            Object::Class(_) => Ok(id),
            _ => Err(Error::resolve_not_a_class(at, name)),
        }
    }
}
