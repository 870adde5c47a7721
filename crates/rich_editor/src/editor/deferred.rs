// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Work that must wait until the surface has finished the current event.

use tracing::debug;

use super::{EditorUpdate, RichEditor};
use crate::{ListStyle, ListType, SelectionPort};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// Give every list of this type the normalized look.
    NormalizeLists(ListType),
}

impl<P: SelectionPort> RichEditor<P> {
    pub(crate) fn defer(&mut self, task: DeferredTask) {
        if !self.deferred.contains(&task) {
            self.deferred.push_back(task);
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    /// Run the queued tasks. The owner calls this once the event that
    /// queued them has been fully handled by the surface.
    pub fn flush_deferred(&mut self) -> EditorUpdate {
        let mut changed = false;
        while let Some(task) = self.deferred.pop_front() {
            match task {
                DeferredTask::NormalizeLists(list_type) => {
                    let style = ListStyle::normalized(list_type);
                    let styled = self.port.set_list_style(list_type, &style);
                    debug!(%list_type, styled, "Normalized lists");
                    changed |= styled;
                }
            }
        }
        if changed {
            self.commit()
        } else {
            EditorUpdate::keep()
        }
    }
}
