use bucket_common::message::{Error, Result};
use log::{debug, trace};

use super::{Class, Field, Method, Module, Object, ObjectId, Parameter, Scope};
use crate::ast::{self, GlobalStatement};

impl Module {
    /// Declare the body of `class` inside the class object `id`, in order.
    pub(super) fn declare_class(&mut self, id: ObjectId, class: &ast::Class) -> Result<()> {
        debug!("declaring class '{}'", class.name);

        for statement in class.body.iter() {
            let name = statement.name();

            if self.declares(id, name) {
                return Err(Error::resolve_redefinition(statement.span().begin, name));
            }

            let child = match statement {
                GlobalStatement::Class(inner) => {
                    let child = self.add(Object::Class(Class {
                        name: inner.name.clone(),
                        parent: Some(id),
                        scope: Scope::default(),
                    }));

                    self.declare_class(child, inner)?;
                    child
                }

                GlobalStatement::Method(method) => self.declare_method(id, method)?,
                GlobalStatement::Field(field) => self.declare_field(id, field)?,
            };

            if let Object::Class(parent) = &mut self.objects[id.0] {
                parent.scope.insert(name.to_string(), child);
            }
        }

        Ok(())
    }

    fn declare_method(&mut self, parent: ObjectId, method: &ast::Method) -> Result<ObjectId> {
        trace!("declaring method '{}'", method.name);

        let arguments = method
            .arguments
            .iter()
            .map(|arg| -> Result<Parameter> {
                Ok(Parameter {
                    name: arg.name.clone(),
                    class: self.lookup_class(parent, &arg.class)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let return_type = method
            .return_class
            .as_ref()
            .map(|class| self.lookup_class(parent, class))
            .transpose()?;

        Ok(self.add(Object::Method(Method {
            name: method.name.clone(),
            parent,
            arguments,
            return_type,
        })))
    }

    fn declare_field(&mut self, parent: ObjectId, field: &ast::Field) -> Result<ObjectId> {
        trace!("declaring field '{}'", field.name);

        let class = self.lookup_class(parent, &field.class)?;

        Ok(self.add(Object::Field(Field {
            name: field.name.clone(),
            parent,
            class,
        })))
    }

    /// Whether the class `id` itself already declares `name`.
    fn declares(&self, id: ObjectId, name: &str) -> bool {
        self.get(id)
            .as_class()
            .map(|class| class.scope.contains(name))
            .unwrap_or(false)
    }

    fn add(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }
}
