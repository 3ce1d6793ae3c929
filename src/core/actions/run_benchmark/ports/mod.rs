pub mod frame_workload;
