use super::{Body, Class, Method};
use crate::{coerce, compatible, Error, Result, Type, Value};
use tracing::debug;

/// Resolves accessors on a [`Class`] by name and parameter types.
///
/// Declarations are searched in a fixed order: the class itself, its
/// superclasses nearest first, then the interfaces of the class and of each
/// superclass, depth-first. Only public types are searched unless the resolver
/// is relaxed. The first declaration found wins; within one type an exact
/// signature is preferred over one that needs widening.
///
/// The implementation bound to a declaration is the first method with the
/// same signature on the class's own ancestry, whatever its visibility, so an
/// override on a non-public class is still the one invoked.
#[derive(Debug, Clone, Copy)]
pub struct AccessorResolver {
    public_only: bool,
}

/// A resolved accessor.
///
/// Bound once when a mapper is built and reused for every mapping call.
pub struct Accessor<T> {
    class: String,
    declaring_class: String,
    name: String,
    params: Vec<Type>,
    ret: Option<Type>,
    body: Body<T>,
}

impl AccessorResolver {
    pub fn new() -> Self {
        Self { public_only: true }
    }

    /// Also searches declarations on non-public types and methods.
    pub fn relaxed() -> Self {
        Self { public_only: false }
    }

    pub fn is_public_only(&self) -> bool {
        self.public_only
    }

    /// Resolves a getter: a method named `name` taking no argument.
    pub fn getter<T>(&self, class: &Class<T>, name: &str) -> Result<Accessor<T>> {
        let accessor = self.find_method(class, name, &[])?;
        if !matches!(accessor.body, Body::Getter(_)) {
            return Err(Error::method_not_found(class.name(), name, &[]));
        }
        Ok(accessor)
    }

    /// Resolves a setter: a method named `name` accepting a value of `arg`.
    pub fn setter<T>(&self, class: &Class<T>, name: &str, arg: &Type) -> Result<Accessor<T>> {
        let accessor = self.find_method(class, name, &[Some(arg.clone())])?;
        if !matches!(accessor.body, Body::Setter(_)) {
            return Err(Error::method_not_found(
                class.name(),
                name,
                core::slice::from_ref(arg),
            ));
        }
        Ok(accessor)
    }

    /// Resolves a method named `name` accepting arguments of `args`. `None`
    /// stands for a null argument.
    pub fn find_method<T>(
        &self,
        class: &Class<T>,
        name: &str,
        args: &[Option<Type>],
    ) -> Result<Accessor<T>> {
        let not_found = || {
            let signature: Vec<Type> = args
                .iter()
                .map(|arg| arg.clone().unwrap_or(Type::Any))
                .collect();
            Error::method_not_found(class.name(), name, &signature)
        };

        let (owner, declared) = self
            .candidates(class)
            .into_iter()
            .find_map(|owner| self.match_declared(owner, name, args).map(|m| (owner, m)))
            .ok_or_else(not_found)?;

        let body = class
            .ancestry()
            .flat_map(|class| class.methods())
            .find(|method| method.same_signature(declared) && !method.body.is_abstract())
            .map(|method| method.body.clone())
            .ok_or_else(not_found)?;

        debug!(
            class = class.name(),
            member = name,
            declared_in = owner.name(),
            params = ?declared.params,
            "resolved accessor"
        );

        Ok(Accessor {
            class: class.name().to_string(),
            declaring_class: owner.name().to_string(),
            name: declared.name.clone(),
            params: declared.params.clone(),
            ret: declared.ret.clone(),
            body,
        })
    }

    /// Types whose declarations are searched, in search order.
    fn candidates<'a, T>(&self, class: &'a Class<T>) -> Vec<&'a Class<T>> {
        let mut candidates: Vec<&Class<T>> = class
            .ancestry()
            .filter(|class| self.is_accessible(class))
            .collect();

        for class in class.ancestry() {
            for iface in class.interfaces() {
                self.push_interfaces(iface, &mut candidates);
            }
        }

        candidates
    }

    fn push_interfaces<'a, T>(&self, iface: &'a Class<T>, out: &mut Vec<&'a Class<T>>) {
        if self.is_accessible(iface) && !out.iter().any(|seen| core::ptr::eq(*seen, iface)) {
            out.push(iface);
        }
        for parent in iface.interfaces() {
            self.push_interfaces(parent, out);
        }
    }

    fn is_accessible<T>(&self, class: &Class<T>) -> bool {
        !self.public_only || class.is_public()
    }

    fn match_declared<'a, T>(
        &self,
        owner: &'a Class<T>,
        name: &str,
        args: &[Option<Type>],
    ) -> Option<&'a Method<T>> {
        let mut candidates = owner.methods().iter().filter(|method| {
            method.name == name
                && method.params.len() == args.len()
                && (!self.public_only || method.is_public())
        });

        let exact = candidates.clone().find(|method| {
            method
                .params
                .iter()
                .zip(args)
                .all(|(param, arg)| arg.as_ref() == Some(param))
        });

        exact.or_else(|| {
            candidates.find(|method| {
                method
                    .params
                    .iter()
                    .zip(args)
                    .all(|(param, arg)| compatible(param, arg.as_ref()))
            })
        })
    }
}

impl Default for AccessorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Accessor<T> {
    /// The class the lookup started from.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The type the matching declaration was found on.
    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Type] {
        &self.params
    }

    /// The declared parameter of a setter.
    pub fn param(&self) -> Option<&Type> {
        self.params.first()
    }

    /// The declared return type of a getter.
    pub fn ret(&self) -> Option<&Type> {
        self.ret.as_ref()
    }

    pub fn is_getter(&self) -> bool {
        matches!(self.body, Body::Getter(_))
    }

    pub fn is_setter(&self) -> bool {
        matches!(self.body, Body::Setter(_))
    }

    /// Invokes a getter on `target`.
    pub fn get(&self, target: &T) -> Result<Value> {
        match &self.body {
            Body::Getter(f) => f(target).map_err(|err| err.context(self.invocation_error())),
            _ => Err(crate::err!("`{}` is not a getter", self.name).context(self.invocation_error())),
        }
    }

    /// Invokes a setter on `target`, widening `value` to the declared
    /// parameter type first.
    pub fn set(&self, target: &mut T, value: Value) -> Result<()> {
        let Body::Setter(f) = &self.body else {
            return Err(
                crate::err!("`{}` is not a setter", self.name).context(self.invocation_error())
            );
        };

        let param = self.param().unwrap_or(&Type::Any);
        coerce::widen(value, param)
            .and_then(|value| f(target, value))
            .map_err(|err| err.context(self.invocation_error()))
    }

    fn invocation_error(&self) -> Error {
        Error::invocation(&self.declaring_class, &self.name, self.param())
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            declaring_class: self.declaring_class.clone(),
            name: self.name.clone(),
            params: self.params.clone(),
            ret: self.ret.clone(),
            body: self.body.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Accessor")
            .field("class", &self.class)
            .field("declaring_class", &self.declaring_class)
            .field("name", &self.name)
            .field("params", &self.params)
            .field("ret", &self.ret)
            .finish()
    }
}
