pub mod slip_json;


pub use slip_json::{
    apply_slip_request, process_slip_request_json, InspectionView, SelectionView, SlipRequest,
    SlipRequestType, SlipResponse, StateView,
};
