use super::DocumentDriver;
use crate::error::ParseError;
use crate::models::EntityRef;
use crate::parsing::kinds::PeoplaDecl;
use crate::parsing::lines::LineClass;

impl DocumentDriver<'_> {
    /// Registers a peopla named on its own line.
    ///
    /// At depth 0 the peopla becomes the new source and all context is
    /// rebuilt around it. Deeper, it replaces the source breadcrumb at its
    /// depth and forgets targets recorded below it.
    pub(super) fn scan_peopla_declaration(&mut self, line: &LineClass) -> Result<(), ParseError> {
        let Some(content) = line.content() else {
            return Ok(());
        };
        if content.extra_tabs() != 0 || !content.shapes.peopla {
            return Ok(());
        }

        let decl = PeoplaDecl::parse(&content.body)
            .ok_or_else(|| ParseError::malformed(line.number, "peopla", &line.text))?;
        if decl.inherits {
            log::debug!("Peopla {:?} carries an inheritance marker", decl.name);
        }

        let id = self.graph.register_peopla(decl.to_peopla(), line.number);
        let depth = content.depth();
        let state = &mut self.state;
        state.leaf_peopla = Some(id);
        state.live = Some(EntityRef::Peopla(id));

        if depth == 0 {
            state.source = Some(id);
            state.targets.clear();
            state.peopla_live = true;
            state.action_group_live = false;
            state.close_relation();
            state.missing_relation = false;
            state.action = None;
            state.source_crumbs.clear();
            state.source_crumbs.update(0, id);
            state.target_crumbs.clear();
            state.pedigree_indent = None;
        } else {
            state.source_crumbs.update(depth, id);
            state.target_crumbs.truncate(depth);
            state.targets.clear();
        }
        Ok(())
    }
}
