use crate::runtime::scheduler::SchedulerCommand;
use crate::summary::Summary;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RequestRender,
    SummaryUpdated(Summary),
    DraftSaved,
    Schedule(SchedulerCommand),
}
