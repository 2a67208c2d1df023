//! Per-method variable management
//!
//! Owns the variable table while one method is being translated.
//! Declared locals are memoized by source slot so every read of a local
//! resolves to the identical variable; constant temporaries are always
//! fresh because each literal occurrence needs its own assignable slot
//! to keep the IR flat.

use rustc_hash::FxHashMap;

use crate::features::lowering::domain::{Literal, VarId, VarKind, Variable};
use crate::shared::models::{LocalDecl, LocalId, TypeRef};

/// Name of the receiver variable
const THIS: &str = "#this";

/// Mutable variable state for one method's translation
pub struct VarManager<'a> {
    /// Slot table of the method under translation
    locals: &'a [LocalDecl],

    /// Memoization of declared locals
    var_map: FxHashMap<LocalId, VarId>,

    /// All variables in creation order
    vars: Vec<Variable>,

    this_var: Option<VarId>,

    params: Vec<VarId>,

    /// Counter for constant temporaries, shared across categories
    temp_counter: u32,
}

impl<'a> VarManager<'a> {
    pub fn new(locals: &'a [LocalDecl]) -> Self {
        Self {
            locals,
            var_map: FxHashMap::default(),
            vars: Vec::new(),
            this_var: None,
            params: Vec::new(),
            temp_counter: 0,
        }
    }

    /// Declare the receiver. Idempotent per source slot.
    pub fn declare_receiver(&mut self, local: LocalId) -> VarId {
        if let Some(&var) = self.var_map.get(&local) {
            return var;
        }
        let ty = self.local_type(local);
        let var = self.new_var(THIS, ty, VarKind::Receiver);
        self.var_map.insert(local, var);
        self.this_var = Some(var);
        var
    }

    /// Declare a parameter in source order. Idempotent per source slot.
    pub fn declare_parameter(&mut self, local: LocalId) -> VarId {
        if let Some(&var) = self.var_map.get(&local) {
            return var;
        }
        let decl = &self.locals[local as usize];
        let name = decl.name.clone();
        let ty = decl.ty.clone();
        let var = self.new_var(name, ty, VarKind::Parameter);
        self.var_map.insert(local, var);
        self.params.push(var);
        var
    }

    /// Resolve a local read or write, creating the variable lazily on
    /// first sight. Repeated resolution of the same slot returns the
    /// identical variable.
    pub fn resolve(&mut self, local: LocalId) -> VarId {
        if let Some(&var) = self.var_map.get(&local) {
            return var;
        }
        let decl = &self.locals[local as usize];
        let name = decl.name.clone();
        let ty = decl.ty.clone();
        let var = self.new_var(name, ty, VarKind::Local);
        self.var_map.insert(local, var);
        var
    }

    /// Allocate a brand-new temporary holding the given literal.
    /// Never memoized: equal literals still get distinct slots.
    pub fn new_constant_temp(&mut self, literal: &Literal) -> VarId {
        let name = format!("#{}constant{}", literal.const_tag(), self.temp_counter);
        self.temp_counter += 1;
        self.new_var(name, literal.type_name(), VarKind::ConstantTemp)
    }

    fn new_var(&mut self, name: impl Into<String>, ty: impl Into<TypeRef>, kind: VarKind) -> VarId {
        let id = self.vars.len() as VarId;
        self.vars.push(Variable::new(id, name, ty, kind));
        id
    }

    fn local_type(&self, local: LocalId) -> TypeRef {
        self.locals[local as usize].ty.clone()
    }

    /// Tear down into (receiver, params, variable table)
    pub fn finish(self) -> (Option<VarId>, Vec<VarId>, Vec<Variable>) {
        (self.this_var, self.params, self.vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::LocalDecl;

    fn locals() -> Vec<LocalDecl> {
        vec![
            LocalDecl::new("this", "com.example.Worker"),
            LocalDecl::new("x", "int"),
            LocalDecl::new("y", "long"),
        ]
    }

    #[test]
    fn test_receiver_named_this() {
        let locals = locals();
        let mut vars = VarManager::new(&locals);
        vars.declare_receiver(0);
        let (this_var, _, table) = vars.finish();
        let this_var = this_var.unwrap();
        assert_eq!(table[this_var as usize].name, "#this");
        assert_eq!(table[this_var as usize].ty.name(), "com.example.Worker");
        assert_eq!(table[this_var as usize].kind, VarKind::Receiver);
    }

    #[test]
    fn test_resolution_is_memoized() {
        let locals = locals();
        let mut vars = VarManager::new(&locals);
        let a = vars.resolve(1);
        let b = vars.resolve(1);
        let c = vars.resolve(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_declare_then_resolve_same_var() {
        let locals = locals();
        let mut vars = VarManager::new(&locals);
        let p = vars.declare_parameter(1);
        assert_eq!(vars.resolve(1), p);
    }

    #[test]
    fn test_constant_temps_always_fresh() {
        let locals = locals();
        let mut vars = VarManager::new(&locals);
        let lit = Literal::Int(5);
        let a = vars.new_constant_temp(&lit);
        let b = vars.new_constant_temp(&lit);
        assert_ne!(a, b);

        let (_, _, table) = vars.finish();
        assert_eq!(table[a as usize].name, "#intconstant0");
        assert_eq!(table[b as usize].name, "#intconstant1");
        assert!(table[a as usize].is_constant_temp());
    }

    #[test]
    fn test_temp_counter_shared_across_categories() {
        let locals = locals();
        let mut vars = VarManager::new(&locals);
        vars.new_constant_temp(&Literal::Str("s".to_string()));
        vars.new_constant_temp(&Literal::Null);
        vars.new_constant_temp(&Literal::Class("A".to_string()));
        let (_, _, table) = vars.finish();
        assert_eq!(table[0].name, "#stringconstant0");
        assert_eq!(table[1].name, "#nullconstant1");
        assert_eq!(table[2].name, "#classconstant2");
    }

    #[test]
    fn test_creation_order_preserved() {
        let locals = locals();
        let mut vars = VarManager::new(&locals);
        vars.declare_receiver(0);
        vars.declare_parameter(1);
        vars.resolve(2);
        vars.new_constant_temp(&Literal::Long(1));
        let (_, _, table) = vars.finish();
        let names: Vec<&str> = table.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["#this", "x", "y", "#longconstant0"]);
    }
}
