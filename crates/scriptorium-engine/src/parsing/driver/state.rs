use crate::models::{ActionGroupId, EntityRef, PeoplaId};
use crate::parsing::breadcrumbs::Breadcrumbs;
use crate::parsing::lines::Scope;

/// Everything the driver remembers between lines.
#[derive(Debug, Default)]
pub(crate) struct ParseState {
    /// A root peopla is open and its attribute lines are being read.
    pub peopla_live: bool,
    pub relation_live: bool,
    pub action_group_live: bool,
    pub table_live: bool,
    /// Depth went back up onto a nested peopla with no relation line in
    /// between; ambiguous lines are skipped until the next root peopla.
    pub missing_relation: bool,
    /// Direction of the open action group (`vs` is directed).
    pub directed: bool,

    pub source: Option<PeoplaId>,
    pub targets: Vec<PeoplaId>,
    pub leaf_peopla: Option<PeoplaId>,
    pub leaf_action_group: Option<ActionGroupId>,
    /// Most recently touched entity; embedded attributes attach here.
    pub live: Option<EntityRef>,

    pub action: Option<String>,
    pub scope: Option<Scope>,
    pub relation_label: Option<String>,
    pub relation_depth: usize,

    pub breadcrumb_depth: usize,
    /// Indent of the last same-level pedigree action. `None` means no
    /// pedigree action is open, so nothing counts as deeper.
    pub pedigree_indent: Option<usize>,
    /// Depth of the previous content line.
    pub previous_depth: Option<usize>,

    pub source_crumbs: Breadcrumbs<PeoplaId>,
    pub target_crumbs: Breadcrumbs<Vec<PeoplaId>>,
}

impl ParseState {
    /// One-line summary of the live flags and pointers, for trace logging.
    pub fn describe(&self, shortcut_open: bool) -> String {
        let flag = |on: bool| if on { 'X' } else { '_' };
        format!(
            "[{}] shortcut [{}] peopla [{}] agroup [{}] relation [{}] table [{}] missing | \
             action={:?} scope={:?} depth={} pedigree={:?} source={:?} targets={:?} live={:?}",
            flag(shortcut_open),
            flag(self.peopla_live),
            flag(self.action_group_live),
            flag(self.relation_live),
            flag(self.table_live),
            flag(self.missing_relation),
            self.action,
            self.scope,
            self.breadcrumb_depth,
            self.pedigree_indent,
            self.source,
            self.targets,
            self.live,
        )
    }

    pub fn close_relation(&mut self) {
        self.relation_live = false;
        self.relation_label = None;
        self.relation_depth = 0;
    }
}
