mod many_to_many;
mod relations_negative;
mod self_relations;
