//! Registered accessor tables for business types.
//!
//! A [`Class`] describes the getters and setters a business type exposes,
//! along with the class hierarchy they are declared in. Mappers never look
//! accessors up while mapping: the [`AccessorResolver`] binds each one once,
//! when the mapper is built.

mod resolve;
pub use resolve::{Accessor, AccessorResolver};

use crate::{Result, Type, Value};
use std::sync::Arc;

pub type GetterFn<T> = Arc<dyn Fn(&T) -> Result<Value> + Send + Sync>;
pub type SetterFn<T> = Arc<dyn Fn(&mut T, Value) -> Result<()> + Send + Sync>;

/// Whether a class or method can be seen from outside its own module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
}

/// The implementation of a method.
pub enum Body<T> {
    Getter(GetterFn<T>),
    Setter(SetterFn<T>),

    /// A declaration without implementation, as found on interfaces.
    Abstract,
}

/// A method declared on a [`Class`].
pub struct Method<T> {
    pub name: String,
    pub params: Vec<Type>,
    pub ret: Option<Type>,
    pub visibility: Visibility,
    pub body: Body<T>,
}

/// The accessor table of a business type `T`.
pub struct Class<T> {
    name: String,
    kind: ClassKind,
    visibility: Visibility,
    superclass: Option<Arc<Class<T>>>,
    interfaces: Vec<Arc<Class<T>>>,
    methods: Vec<Method<T>>,
}

pub struct ClassBuilder<T> {
    class: Class<T>,
}

impl<T> Body<T> {
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Abstract)
    }
}

impl<T> Clone for Body<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Getter(f) => Self::Getter(f.clone()),
            Self::Setter(f) => Self::Setter(f.clone()),
            Self::Abstract => Self::Abstract,
        }
    }
}

impl<T> core::fmt::Debug for Body<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Getter(_) => f.write_str("Getter"),
            Self::Setter(_) => f.write_str("Setter"),
            Self::Abstract => f.write_str("Abstract"),
        }
    }
}

impl<T: 'static> Method<T> {
    pub fn getter<F>(name: impl Into<String>, ret: Type, f: F) -> Self
    where
        F: Fn(&T) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: vec![],
            ret: Some(ret),
            visibility: Visibility::Public,
            body: Body::Getter(Arc::new(f)),
        }
    }

    pub fn setter<F>(name: impl Into<String>, param: Type, f: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: vec![param],
            ret: None,
            visibility: Visibility::Public,
            body: Body::Setter(Arc::new(f)),
        }
    }

    pub fn declaration(name: impl Into<String>, params: Vec<Type>, ret: Option<Type>) -> Self {
        Self {
            name: name.into(),
            params,
            ret,
            visibility: Visibility::Public,
            body: Body::Abstract,
        }
    }

    pub fn package_private(mut self) -> Self {
        self.visibility = Visibility::Package;
        self
    }
}

impl<T> Method<T> {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub(crate) fn same_signature(&self, other: &Method<T>) -> bool {
        self.name == other.name && self.params == other.params
    }
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            params: self.params.clone(),
            ret: self.ret.clone(),
            visibility: self.visibility,
            body: self.body.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("ret", &self.ret)
            .field("visibility", &self.visibility)
            .field("body", &self.body)
            .finish()
    }
}

impl<T: 'static> Class<T> {
    /// Starts a public class declaration.
    pub fn builder(name: impl Into<String>) -> ClassBuilder<T> {
        ClassBuilder {
            class: Class {
                name: name.into(),
                kind: ClassKind::Class,
                visibility: Visibility::Public,
                superclass: None,
                interfaces: vec![],
                methods: vec![],
            },
        }
    }

    /// Starts a public interface declaration.
    pub fn interface(name: impl Into<String>) -> ClassBuilder<T> {
        let mut builder = Self::builder(name);
        builder.class.kind = ClassKind::Interface;
        builder
    }
}

impl<T> Class<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn superclass(&self) -> Option<&Class<T>> {
        self.superclass.as_deref()
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &Class<T>> + '_ {
        self.interfaces.iter().map(|iface| &**iface)
    }

    /// Methods declared directly on this class.
    pub fn methods(&self) -> &[Method<T>] {
        &self.methods
    }

    /// This class followed by its superclasses, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Class<T>> + '_ {
        core::iter::successors(Some(self), |class| class.superclass())
    }

    /// Returns `true` if `name` is this class or one of its ancestors or
    /// implemented interfaces.
    pub fn is_a(&self, name: &str) -> bool {
        self.ancestry().any(|class| {
            class.name == name || class.interfaces().any(|iface| iface.is_a(name))
        })
    }
}

impl<T> core::fmt::Debug for Class<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("visibility", &self.visibility)
            .field("superclass", &self.superclass.as_ref().map(|class| class.name()))
            .field(
                "interfaces",
                &self.interfaces.iter().map(|iface| iface.name()).collect::<Vec<_>>(),
            )
            .field("methods", &self.methods)
            .finish()
    }
}

impl<T: 'static> ClassBuilder<T> {
    pub fn package_private(mut self) -> Self {
        self.class.visibility = Visibility::Package;
        self
    }

    pub fn extends(mut self, superclass: impl Into<Arc<Class<T>>>) -> Self {
        self.class.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<Arc<Class<T>>>) -> Self {
        self.class.interfaces.push(interface.into());
        self
    }

    pub fn method(mut self, method: Method<T>) -> Self {
        self.class.methods.push(method);
        self
    }

    /// Declares a public getter.
    pub fn getter<F>(self, name: impl Into<String>, ret: Type, f: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.method(Method::getter(name, ret, move |target| Ok(f(target))))
    }

    /// Declares a public setter.
    pub fn setter<F>(self, name: impl Into<String>, param: Type, f: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<()> + Send + Sync + 'static,
    {
        self.method(Method::setter(name, param, f))
    }

    /// Declares a method without implementation.
    pub fn declares(self, name: impl Into<String>, params: Vec<Type>, ret: Option<Type>) -> Self {
        self.method(Method::declaration(name, params, ret))
    }

    pub fn build(self) -> Class<T> {
        self.class
    }
}

impl<T: 'static> From<ClassBuilder<T>> for Arc<Class<T>> {
    fn from(builder: ClassBuilder<T>) -> Self {
        Arc::new(builder.build())
    }
}
