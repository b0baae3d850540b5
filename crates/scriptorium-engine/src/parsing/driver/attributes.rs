//! Lines read while a root peopla is open.
//!
//! The same body can mean several things; the first matching reading wins:
//!
//! 1. `>\t*LABEL*` opens a relation.
//! 2. `>\t[Name]` while a relation is open names its `is` party.
//! 3. `\t\tKEY[value]` (or `\tKEY[value]`) at depth 0 qualifies the current action.
//! 4. `\tLABEL` at depth 0 starts an action.
//! 5. `vs[Name]` / `w/[Name]` adds a target to an action group.
//! 6. `>\t...LABEL` inside a pedigree: an action, or an attribute of one when
//!    indented past the last pedigree action.
//! 7. While a relation is known to be missing, nothing else is attempted.
//! 8. Any other nested `KEY[value]` attaches to the most recently touched entity.

use super::DocumentDriver;
use crate::error::{DiagnosticKind, ParseError};
use crate::models::{
    ActionGroup, Bundle, EntityRef, PeoplaId, PeorelId, Peorel, Value, gender_inference,
};
use crate::parsing::kinds::{ActionDecl, Attribute, GroupPrefix, PeoplaDecl, relation_label};
use crate::parsing::lines::{ContentLine, LineClass, Scope};

/// Action label used when an attribute arrives before any action.
pub const FALLBACK_ACTION: &str = "GENERAL";

/// A pedigree line body: no `[`, and `*` only as a trailing inheritance mark.
fn is_pedigree_body(body: &str) -> bool {
    !body.contains('[') && ActionDecl::parse(body).is_some()
}

impl DocumentDriver<'_> {
    pub(super) fn scan_peopla_attributes(&mut self, line: &LineClass) -> Result<(), ParseError> {
        let Some(content) = line.content() else {
            return Ok(());
        };
        let depth = content.depth();
        let extra = content.extra_tabs();
        let body = content.body.as_str();

        if depth >= 1 && extra == 0 && content.shapes.relation {
            self.open_relation(body, depth);
        } else if self.state.relation_live && depth >= 1 && extra == 0 && content.shapes.peopla {
            self.relation_target(line, body, depth)?;
        } else if depth == 0
            && !body.starts_with('*')
            && (extra >= 2 || (extra == 1 && Attribute::is_attribute_shaped(body)))
        {
            self.action_attribute(line, body)?;
        } else if depth == 0 && extra == 1 && !body.starts_with('*') {
            self.action_declaration(line, body)?;
        } else if extra == 0 && content.shapes.action_group {
            self.action_group_member(line, body, depth)?;
        } else if depth >= 1 && is_pedigree_body(body) {
            self.pedigree_line(line, content)?;
        } else if self.state.missing_relation {
            log::debug!("line {}: skipped while a relation is missing", line.number);
        } else if content.indent() > 0 && !body.starts_with(['*', '[']) {
            self.embedded_attribute(line, body)?;
        }
        Ok(())
    }

    fn open_relation(&mut self, body: &str, depth: usize) {
        let Some(label) = relation_label(body) else {
            return;
        };
        log::debug!("Relation {label:?} is now open at depth {depth}");
        self.state.relation_label = Some(label.to_string());
        self.state.relation_depth = depth;
        self.state.relation_live = true;
    }

    /// Resolves who the new relation points to, records one peorel per
    /// party and derives the `is` peopla's gender from the label.
    fn relation_target(
        &mut self,
        line: &LineClass,
        body: &str,
        depth: usize,
    ) -> Result<(), ParseError> {
        let decl = PeoplaDecl::parse(body)
            .ok_or_else(|| ParseError::malformed(line.number, "relation target", &line.text))?;
        let is = self.graph.register_peopla(decl.to_peopla(), line.number);
        self.state.leaf_peopla = Some(is);
        self.state.live = Some(EntityRef::Peopla(is));

        let parent = depth - 1;
        let mut candidates: Vec<PeoplaId> = Vec::new();
        if self.state.action_group_live {
            if let Some(targets) = self.state.target_crumbs.get(parent) {
                candidates.extend(targets.iter().copied());
            }
            if self.state.scope != Some(Scope::Leaf) {
                candidates.extend(self.state.source_crumbs.get(parent).copied());
            }
        } else {
            candidates.extend(self.state.source_crumbs.get(parent).copied());
        }
        if candidates.is_empty() {
            candidates.extend(self.state.source);
        }

        let mut to: Vec<PeoplaId> = Vec::new();
        for id in candidates {
            if !to.contains(&id) {
                to.push(id);
            }
        }

        let label = self.state.relation_label.clone().unwrap_or_default();
        if to.is_empty() {
            self.diagnose(
                line,
                DiagnosticKind::AmbiguousContext,
                format!("no peopla for {label:?} relation to point to"),
            );
        } else {
            let peorels: Vec<PeorelId> = to
                .into_iter()
                .map(|to| {
                    let peorel = Peorel::new(is, to, label.clone(), self.state.relation_depth);
                    self.graph.register_peorel(peorel, line.number)
                })
                .collect();

            let gender = Bundle::from([
                ("value".to_string(), Value::text(gender_inference(&label).as_str())),
                ("evidence".to_string(), Value::Peorels(peorels)),
            ]);
            self.update_peopla(is, "GENDER", gender, line.number);
        }

        self.state.close_relation();
        self.state.pedigree_indent = None;
        Ok(())
    }

    fn action_attribute(&mut self, line: &LineClass, body: &str) -> Result<(), ParseError> {
        let attribute = Attribute::parse(body)
            .ok_or_else(|| ParseError::malformed(line.number, "attribute", &line.text))?;
        let label = self.action_label();

        let target = if !self.state.action_group_live {
            self.state.source.map(EntityRef::Peopla)
        } else if self.state.scope == Some(Scope::Leaf) {
            self.state.targets.last().copied().map(EntityRef::Peopla)
        } else {
            self.state.leaf_action_group.map(EntityRef::ActionGroup)
        };

        match target {
            Some(entity) => {
                self.update_entity(entity, &label, attribute.into_bundle(), line.number)
            }
            None => self.diagnose(
                line,
                DiagnosticKind::AmbiguousContext,
                format!("no entity for {label} attribute"),
            ),
        }
        Ok(())
    }

    fn action_declaration(&mut self, line: &LineClass, body: &str) -> Result<(), ParseError> {
        let decl = ActionDecl::parse(body)
            .ok_or_else(|| ParseError::malformed(line.number, "action", &line.text))?;
        self.state.action = Some(decl.label.clone());
        let inherited = self.inheritance(decl.inherits);

        if !self.state.action_group_live {
            let Some(source) = self.state.source else {
                self.diagnose(
                    line,
                    DiagnosticKind::AmbiguousContext,
                    format!("no source peopla for action {}", decl.label),
                );
                return Ok(());
            };
            let peopla = self.graph.peopla_mut(source);
            peopla.actions.add_instance(&decl.label, inherited, line.number);
            peopla.evidence.record(line.number);
            self.state.live = Some(EntityRef::Peopla(source));
        } else if self.state.scope == Some(Scope::Leaf) {
            for target in self.state.targets.clone() {
                self.update_peopla(target, &decl.label, inherited.clone(), line.number);
            }
        } else {
            let source = self.state.source;
            self.open_group_action(line, &decl.label, source, inherited);
        }
        Ok(())
    }

    fn action_group_member(
        &mut self,
        line: &LineClass,
        body: &str,
        depth: usize,
    ) -> Result<(), ParseError> {
        let decl = PeoplaDecl::parse(body)
            .ok_or_else(|| ParseError::malformed(line.number, "action group", &line.text))?;
        let target = self.graph.register_peopla(decl.to_peopla(), line.number);

        let state = &mut self.state;
        state.leaf_peopla = Some(target);
        state.live = Some(EntityRef::Peopla(target));
        if !state.targets.contains(&target) {
            state.targets.push(target);
        }
        state.target_crumbs.update(depth, state.targets.clone());
        state.action_group_live = true;
        state.directed = decl.group.is_some_and(GroupPrefix::is_directed);
        Ok(())
    }

    fn pedigree_line(&mut self, line: &LineClass, content: &ContentLine) -> Result<(), ParseError> {
        let indent = content.indent();
        let deeper = self.state.pedigree_indent.is_some_and(|open| indent > open);

        if deeper {
            let attribute = Attribute::parse(&content.body).ok_or_else(|| {
                ParseError::malformed(line.number, "pedigree attribute", &line.text)
            })?;
            let label = self.action_label();
            match self.state.leaf_peopla {
                Some(leaf) => {
                    self.update_peopla(leaf, &label, attribute.into_bundle(), line.number)
                }
                None => self.diagnose(
                    line,
                    DiagnosticKind::AmbiguousContext,
                    format!("no pedigree peopla for {label} attribute"),
                ),
            }
            return Ok(());
        }

        let decl = ActionDecl::parse(&content.body)
            .ok_or_else(|| ParseError::malformed(line.number, "pedigree action", &line.text))?;
        self.state.action = Some(decl.label.clone());
        self.state.pedigree_indent = Some(indent);
        let inherited = self.inheritance(decl.inherits);
        let leaf = self.state.leaf_peopla;

        if self.state.relation_live || self.state.targets.is_empty() {
            self.pedigree_action_on(line, leaf, &decl.label, inherited);
        } else if self.state.action_group_live {
            if self.state.scope == Some(Scope::Leaf) {
                let target = self.state.targets.last().copied().or(leaf);
                self.pedigree_action_on(line, target, &decl.label, inherited);
            } else {
                let source = self
                    .state
                    .source_crumbs
                    .get(content.depth())
                    .copied()
                    .or(leaf);
                self.open_group_action(line, &decl.label, source, inherited);
            }
        } else {
            log::debug!(
                "line {}: pedigree action {} has targets but no open group",
                line.number,
                decl.label
            );
        }
        Ok(())
    }

    fn pedigree_action_on(
        &mut self,
        line: &LineClass,
        peopla: Option<PeoplaId>,
        label: &str,
        inherited: Bundle,
    ) {
        match peopla {
            Some(id) => {
                self.update_peopla(id, label, inherited, line.number);
                self.state.live = Some(EntityRef::Peopla(id));
            }
            None => self.diagnose(
                line,
                DiagnosticKind::AmbiguousContext,
                format!("no pedigree peopla for action {label}"),
            ),
        }
    }

    /// Registers an action group between `source` and the current targets
    /// and starts a new instance of `label` on it.
    fn open_group_action(
        &mut self,
        line: &LineClass,
        label: &str,
        source: Option<PeoplaId>,
        inherited: Bundle,
    ) {
        let Some(source) = source else {
            self.diagnose(
                line,
                DiagnosticKind::AmbiguousContext,
                format!("no source peopla for group action {label}"),
            );
            return;
        };

        let targets = self.state.targets.clone();
        let group = ActionGroup::new(label, self.state.directed, source, targets);
        let id = self.graph.register_action_group(group, line.number);
        self.graph
            .action_group_mut(id)
            .actions
            .add_instance(label, inherited, line.number);
        self.state.leaf_action_group = Some(id);
        self.state.live = Some(EntityRef::ActionGroup(id));
    }

    fn embedded_attribute(&mut self, line: &LineClass, body: &str) -> Result<(), ParseError> {
        let attribute = Attribute::parse(body)
            .ok_or_else(|| ParseError::malformed(line.number, "embedded attribute", &line.text))?;
        let label = self.action_label();
        let target = self
            .state
            .live
            .or(self.state.leaf_peopla.map(EntityRef::Peopla))
            .or(self.state.source.map(EntityRef::Peopla));

        match target {
            Some(entity) => {
                self.update_entity(entity, &label, attribute.into_bundle(), line.number)
            }
            None => self.diagnose(
                line,
                DiagnosticKind::AmbiguousContext,
                format!("no entity for embedded {label} attribute"),
            ),
        }
        Ok(())
    }

    fn action_label(&self) -> String {
        self.state
            .action
            .clone()
            .unwrap_or_else(|| FALLBACK_ACTION.to_string())
    }

    fn inheritance(&self, inherits: bool) -> Bundle {
        if inherits {
            self.header.inheritable()
        } else {
            Bundle::new()
        }
    }
}
